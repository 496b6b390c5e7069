use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::invoices_model::{Invoice, InvoiceLineItem, InvoiceWithLineItems, NewInvoice};
use super::invoices_traits::{InvoiceRepositoryTrait, InvoiceServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::projects::ProjectGraph;

/// Service generating client invoices for a billing period.
pub struct InvoiceService {
    repository: Arc<dyn InvoiceRepositoryTrait>,
}

impl InvoiceService {
    pub fn new(repository: Arc<dyn InvoiceRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn load_graph(&self, project_id: &str) -> Result<ProjectGraph> {
        self.repository
            .load_project_graph(project_id)?
            .ok_or_else(|| Error::NotFound(format!("Project '{}' not found", project_id)))
    }
}

/// Line items for a billing period: billable in-period hours grouped per
/// (task, user) and priced at the user's task assignment rate.
///
/// Groups whose user holds no assignment on the task are skipped entirely.
/// Invoicing drops unpriceable hours where budget rollups price them at
/// zero; the two policies are deliberately different.
fn compute_line_items(
    graph: &ProjectGraph,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> Vec<InvoiceLineItem> {
    let mut line_items = Vec::new();

    for phase in &graph.phases {
        for task in &phase.tasks {
            // Group billable in-period hours by user, in first-seen order.
            let mut user_hours: Vec<(String, String, Decimal)> = Vec::new();
            for entry in &task.time_entries {
                if !entry.entry.is_billable
                    || entry.entry.date < period_start
                    || entry.entry.date > period_end
                {
                    continue;
                }
                match user_hours.iter_mut().find(|(id, _, _)| *id == entry.entry.user_id) {
                    Some((_, _, hours)) => *hours += entry.entry.hours,
                    None => user_hours.push((
                        entry.entry.user_id.clone(),
                        entry.user.name.clone(),
                        entry.entry.hours,
                    )),
                }
            }

            for (user_id, user_name, hours) in user_hours {
                if hours <= Decimal::ZERO {
                    continue;
                }
                let assignment = task
                    .assignments
                    .iter()
                    .find(|a| a.assignment.user_id == user_id);
                let Some(assignment) = assignment else {
                    continue;
                };

                let hourly_rate = assignment.assignment.hourly_rate;
                line_items.push(InvoiceLineItem {
                    task_id: task.task.id.clone(),
                    task_title: task.task.title.clone(),
                    phase_name: phase.phase.name.clone(),
                    hours,
                    hourly_rate,
                    amount: hours * hourly_rate,
                    user_name,
                });
            }
        }
    }

    line_items
}

#[async_trait::async_trait]
impl InvoiceServiceTrait for InvoiceService {
    /// Generates an invoice for a project and billing period (both ends
    /// inclusive) and persists its header.
    ///
    /// A period with no billable entries still persists a header with a
    /// zero total and returns an empty line item list.
    async fn generate(
        &self,
        project_id: &str,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<InvoiceWithLineItems> {
        debug!(
            "Generating invoice for project '{}' over {}..={}",
            project_id, period_start, period_end
        );
        if period_start > period_end {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Billing period start must not be after its end".to_string(),
            )));
        }

        let graph = self.load_graph(project_id)?;
        let line_items = compute_line_items(&graph, period_start, period_end);
        let total_amount: Decimal = line_items.iter().map(|li| li.amount).sum();

        let invoice = self
            .repository
            .insert_invoice(NewInvoice {
                project_id: project_id.to_string(),
                client_name: graph.project.client_name.clone(),
                period_start,
                period_end,
                total_amount,
            })
            .await?;

        Ok(InvoiceWithLineItems {
            invoice,
            line_items,
        })
    }

    /// Stored header plus line items recomputed fresh against the stored
    /// project and period.
    ///
    /// The header's total stays the originally persisted value, which may
    /// no longer match the recomputed items if time entries changed since
    /// generation. Recomputation never persists another header.
    fn get_invoice_with_details(&self, invoice_id: &str) -> Result<InvoiceWithLineItems> {
        let invoice = self
            .repository
            .find_invoice(invoice_id)?
            .ok_or_else(|| Error::NotFound(format!("Invoice '{}' not found", invoice_id)))?;

        let graph = self.load_graph(&invoice.project_id)?;
        let line_items = compute_line_items(&graph, invoice.period_start, invoice.period_end);

        Ok(InvoiceWithLineItems {
            invoice,
            line_items,
        })
    }

    fn list_invoices(&self) -> Result<Vec<Invoice>> {
        self.repository.list_invoices()
    }

    fn list_project_invoices(&self, project_id: &str) -> Result<Vec<Invoice>> {
        self.repository.list_project_invoices(project_id)
    }
}
