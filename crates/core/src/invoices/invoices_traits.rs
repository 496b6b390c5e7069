use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::invoices::invoices_model::{Invoice, InvoiceWithLineItems, NewInvoice};
use crate::projects::ProjectGraph;

/// Trait for invoice repository operations.
#[async_trait]
pub trait InvoiceRepositoryTrait: Send + Sync {
    /// Full project subtree with users joined to time entries and
    /// assignments; the service applies the billable/period filter.
    fn load_project_graph(&self, project_id: &str) -> Result<Option<ProjectGraph>>;

    fn find_invoice(&self, invoice_id: &str) -> Result<Option<Invoice>>;
    fn list_invoices(&self) -> Result<Vec<Invoice>>;
    fn list_project_invoices(&self, project_id: &str) -> Result<Vec<Invoice>>;
    async fn insert_invoice(&self, new_invoice: NewInvoice) -> Result<Invoice>;
}

/// Trait for invoice service operations.
#[async_trait]
pub trait InvoiceServiceTrait: Send + Sync {
    async fn generate(
        &self,
        project_id: &str,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<InvoiceWithLineItems>;

    fn get_invoice_with_details(&self, invoice_id: &str) -> Result<InvoiceWithLineItems>;

    fn list_invoices(&self) -> Result<Vec<Invoice>>;
    fn list_project_invoices(&self, project_id: &str) -> Result<Vec<Invoice>>;
}
