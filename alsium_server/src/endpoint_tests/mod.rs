mod helpers;
mod mocks;
mod orders;
mod pages;
mod payments;
