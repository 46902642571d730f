//! The owner's work history, plus loading of user-supplied record files.

use std::fs;
use std::path::Path;

use folio_core::enums::Category;
use folio_core::record::{WorkRecord, WorkRecordBuilder};

use crate::Result;

/// The built-in work history, oldest first.
///
/// Several periods overlap and the latest one is ongoing, so the
/// timeline always has something interesting to lay out.
pub fn built_in() -> Vec<WorkRecord> {
    vec![
        WorkRecordBuilder::new("Sunrise Digital")
            .title("Backend Engineer", "後端工程師")
            .description(
                "Built the order pipeline and kept a fleet of cron jobs honest.",
                "打造訂單資料管線，並看管一大群排程任務。",
            )
            .start("2018-07")
            .end("2020-03")
            .category(Category::FullTime)
            .tags(["Node.js", "PostgreSQL", "Redis"])
            .build(),
        WorkRecordBuilder::new("Glacier Analytics")
            .title("Data Pipeline Consultant", "資料管線顧問")
            .description(
                "Rebuilt their nightly ETL into an hourly incremental flow.",
                "把每晚一次的 ETL 改造成每小時的增量流程。",
            )
            .start("2019-06")
            .end("2019-12")
            .category(Category::Freelance)
            .tags(["Python", "Airflow", "BigQuery"])
            .build(),
        WorkRecordBuilder::new("Lighthouse Games")
            .title("Game Server Programmer", "遊戲伺服器工程師")
            .description(
                "Wrote the realtime match server for a co-op puzzle game.",
                "為合作解謎遊戲撰寫即時對戰伺服器。",
            )
            .start("2020-03")
            .end("2021-08")
            .category(Category::Contract)
            .tags(["Rust", "WebSocket", "Tokio"])
            .build(),
        WorkRecordBuilder::new("Harborview Software")
            .title("Senior Backend Engineer", "資深後端工程師")
            .description(
                "Led the billing rewrite and the slow goodbye to the monolith.",
                "主導計費系統重寫，陪著單體架構慢慢退場。",
            )
            .start("2021-05")
            .end("2023-10")
            .category(Category::FullTime)
            .tags(["Go", "Kubernetes", "gRPC"])
            .build(),
        WorkRecordBuilder::new("Driftline Studio")
            .title("Tooling Engineer", "工具開發工程師")
            .description(
                "Evenings-and-weekends CLI work for a tiny indie studio.",
                "晚上與週末幫獨立工作室寫命令列工具。",
            )
            .start("2022-02")
            .end("2022-09")
            .category(Category::PartTime)
            .tags(["TypeScript", "CLI"])
            .build(),
        WorkRecordBuilder::new("Quill & Query")
            .title("Staff Engineer", "主任工程師")
            .description(
                "Running the storage team for a document search product.",
                "帶領文件搜尋產品的儲存團隊。",
            )
            .start("2023-11")
            .category(Category::FullTime)
            .tags(["Rust", "Distributed Systems"])
            .build(),
    ]
}

/// Parses a JSON array of work records.
pub fn from_json_str(json: &str) -> Result<Vec<WorkRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads work records from a user-supplied JSON file.
///
/// Only I/O and JSON shape fail here; records with bad dates or missing
/// fields load fine and are dropped later by validation.
pub fn load_records(path: &Path) -> Result<Vec<WorkRecord>> {
    let json = fs::read_to_string(path)?;
    from_json_str(&json)
}
