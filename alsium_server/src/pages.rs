//! The three HTML pages. They are compiled into the binary and served as-is, apart from the payment page, which needs
//! the gateway's public key id.

const INDEX_HTML: &str = include_str!("../templates/index.html");
const PAYMENT_HTML: &str = include_str!("../templates/payment.html");
const INT_SHEET_HTML: &str = include_str!("../templates/int_sheet.html");

const KEY_ID_PLACEHOLDER: &str = "{{ razorpay_key_id }}";

pub fn index_page() -> &'static str {
    INDEX_HTML
}

pub fn int_sheet_page() -> &'static str {
    INT_SHEET_HTML
}

pub fn payment_page(razorpay_key_id: &str) -> String {
    PAYMENT_HTML.replace(KEY_ID_PLACEHOLDER, &escape_html(razorpay_key_id))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
