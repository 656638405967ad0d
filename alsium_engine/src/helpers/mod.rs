mod payment_signature;

pub use payment_signature::{payment_signature, signature_message, PaymentVerifier};
