use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "Название", "Описание", "Категория", "Срок", "Приоритет", "Статус"]);
        for task in tasks {
            table.add_row(row![task.id, task.title, task.description, task.category, task.due_date, task.priority, task.status]);
        }
        table.printstd();

        Ok(())
    }
}
