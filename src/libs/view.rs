use super::formatter::FormattedTask;
use super::messages::Message;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn table(tasks: &[FormattedTask]) -> Table {
        let mut table = Table::new();

        table.set_titles(row![
            Message::TableHeaderName,
            Message::TableHeaderStatus,
            Message::TableHeaderTime
        ]);
        for task in tasks {
            table.add_row(row![task.name, task.status, task.time]);
        }

        table
    }

    pub fn tasks(tasks: &[FormattedTask]) {
        Self::table(tasks).printstd();
    }
}
