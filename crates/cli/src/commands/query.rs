use orderlens_core::config::{AppConfig, LoadOptions};
use orderlens_core::{ApplicationError, Dataset};
use orderlens_mcp::tools::{AnalyticsTools, ToolResponse};

use super::CommandResult;

pub fn recent(country: &str, limit: i64) -> CommandResult {
    execute("recent", |tools| tools.list_recent_customers_by_country(country, limit))
}

pub fn customer_id(name: &str) -> CommandResult {
    execute("customer-id", |tools| tools.get_customer_id_by_name(name))
}

pub fn order_count(name: &str, month: &str) -> CommandResult {
    execute("order-count", |tools| tools.get_order_count_by_customer_and_month(name, month))
}

pub fn spend(customer_ids: &[i64]) -> CommandResult {
    execute("spend", |tools| tools.get_customer_total_spend(customer_ids))
}

fn execute<F>(command: &str, query: F) -> CommandResult
where
    F: FnOnce(&AnalyticsTools) -> ToolResponse,
{
    let tools = match load_tools() {
        Ok(tools) => tools,
        Err(error) => {
            return CommandResult::failure(
                command,
                error.error_class(),
                error.to_string(),
                exit_code_for(&error),
            )
        }
    };

    match query(&tools).to_json() {
        Ok(output) => CommandResult::payload(output),
        Err(error) => CommandResult::failure(command, "serialization", error.to_string(), 1),
    }
}

fn load_tools() -> Result<AnalyticsTools, ApplicationError> {
    let config = AppConfig::load(LoadOptions::default())?;
    let dataset = Dataset::load(&config.dataset)?;
    Ok(AnalyticsTools::new(dataset.facade()))
}

fn exit_code_for(error: &ApplicationError) -> u8 {
    match error {
        ApplicationError::Configuration(_) => 2,
        ApplicationError::Dataset(_) => 3,
    }
}
