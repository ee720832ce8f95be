use colored::*;
use futures::FutureExt;
use migration::Migrator;
use sea_orm_migration::prelude::*;
use std::future::Future;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

pub async fn run_all_migrations(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("DB connection failed");

    println!("Running migrations...");
    let schema_manager = SchemaManager::new(&db);

    for migration in <Migrator as MigratorTrait>::migrations() {
        let label = format!("Applying {}", migration.name().bold());
        run_step(&label, migration.up(&schema_manager)).await;
    }
}

pub async fn rollback_all_migrations(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("DB connection failed");

    println!("Rolling back migrations...");
    let schema_manager = SchemaManager::new(&db);

    for migration in <Migrator as MigratorTrait>::migrations().into_iter().rev() {
        let label = format!("Reverting {}", migration.name().bold());
        run_step(&label, migration.down(&schema_manager)).await;
    }
}

async fn run_step<F>(label: &str, step: F)
where
    F: Future<Output = Result<(), DbErr>>,
{
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(label.len()));
    print!("{}{} ", label, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(step).catch_unwind().await;

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Ok(Err(err)) => {
            println!("{} {}", "failed".red(), err);
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "failed".red());
            std::process::exit(1);
        }
    }
}
