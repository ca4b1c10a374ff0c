//! `nhsuite --import-file` - Stage a CSV network hierarchy.

use std::path::Path;

use nh_sync::{ImportOptions, ImportReport, SyncError, SyncResult};

use super::Context;
use crate::output::{self, Level, Message};

pub async fn execute(ctx: &Context, path: &Path) {
    output::progress("Please wait... importing data.");

    let options = ImportOptions::from_config(&ctx.config);
    if !options.safety {
        output::warning("Safety parameter is off, no backup from server.");
    }

    let batch = match nh_sync::read_batch(path) {
        Ok(batch) => batch,
        Err(e) => {
            outcome(&Err(e), path).iter().for_each(Message::emit);
            return;
        }
    };

    // Reported once, whatever the staged write does next
    for issue in &batch.issues {
        output::warning(&issue.to_string());
    }

    let result = nh_sync::stage_batch(&ctx.client, &batch, &options).await;
    outcome(&result, path).iter().for_each(Message::emit);
}

/// Messages for the import outcome; dropped fields are reported separately.
fn outcome(result: &SyncResult<ImportReport>, path: &Path) -> Vec<Message> {
    match result {
        Ok(report) => {
            let mut messages = Vec::new();
            if let Some(backup) = &report.backup {
                messages.push(Message::new(
                    Level::Note,
                    format!(
                        "Safety parameter is on, current Network Hierarchy backed up in {} before import.",
                        backup.display()
                    ),
                ));
            }
            messages.push(Message::new(
                Level::Success,
                format!("{} lines imported successfully!", report.imported),
            ));
            messages
        }
        Err(e) => {
            let mut messages = vec![Message::new(
                Level::Failure,
                format!("Data import failed: {e}"),
            )];
            if matches!(e, SyncError::Rejected | SyncError::Remote(_)) {
                messages.push(Message::new(
                    Level::Note,
                    format!(
                        "Check {} for incorrect format (no data) or incorrect data.",
                        path.display()
                    ),
                ));
            }
            messages
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_context;
    use std::path::PathBuf;
    use wiremock::matchers::{method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const HEADER: &str = "id,group,name,cidr,description,domain_id,location,country_code";

    #[tokio::test]
    async fn test_header_only_file_never_reaches_the_console() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::TempDir::new().unwrap();
        let csv = dir.path().join("empty.csv");
        std::fs::write(&csv, format!("{HEADER}\n")).unwrap();
        let mut ctx = test_context(&server, true);
        ctx.config.backup_dir = dir.path().join("safety");

        execute(&ctx, &csv).await;
        assert!(!ctx.config.backup_dir.exists());

        let batch = nh_sync::read_batch(&csv).unwrap();
        let options = ImportOptions::from_config(&ctx.config);
        let result = nh_sync::stage_batch(&ctx.client, &batch, &options).await;
        let messages = outcome(&result, &csv);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, Level::Failure);
        assert!(messages[0].text.starts_with("Data import failed: no rows to import"));
    }

    #[tokio::test]
    async fn test_rejected_write_points_at_the_file() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(url_path("/api/config/network_hierarchy/staged_networks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::TempDir::new().unwrap();
        let csv = dir.path().join("in.csv");
        let rows = format!("{HEADER}\n1,G,bad name,10.0.0.0/8,,0,N/A,N/A\n");
        std::fs::write(&csv, rows).unwrap();
        let ctx = test_context(&server, false);

        let batch = nh_sync::read_batch(&csv).unwrap();
        assert_eq!(batch.issues.len(), 1);

        let options = ImportOptions::from_config(&ctx.config);
        let result = nh_sync::stage_batch(&ctx.client, &batch, &options).await;
        let messages = outcome(&result, &csv);
        assert_eq!(messages[0].level, Level::Failure);
        assert_eq!(messages[1].level, Level::Note);
        assert!(messages[1].text.contains("in.csv"));
    }

    #[test]
    fn test_success_mentions_backup() {
        let report = ImportReport {
            imported: 3,
            issues: Vec::new(),
            backup: Some(PathBuf::from("safety/backup.csv")),
        };
        let messages = outcome(&Ok(report), Path::new("in.csv"));
        assert_eq!(messages.len(), 2);
        assert!(messages[0].text.contains("safety/backup.csv"));
        assert_eq!(
            messages[1],
            Message::new(Level::Success, "3 lines imported successfully!")
        );
    }
}
