//! Invoices module - billable-period line item generation and headers.

mod invoices_model;
mod invoices_service;
mod invoices_traits;


// Re-export the public interface
pub use invoices_model::{Invoice, InvoiceLineItem, InvoiceWithLineItems, NewInvoice};
pub use invoices_service::InvoiceService;
pub use invoices_traits::{InvoiceRepositoryTrait, InvoiceServiceTrait};
