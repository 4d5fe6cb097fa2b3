//! End-to-end registration against a local HTTP endpoint

use std::cell::RefCell;

use chrono::NaiveDate;
use matreg_app::app::register_material;
use matreg_app::config::Config;
use matreg_app::form::SubmissionReport;
use matreg_app::notification::{Notification, NotificationKind, Notifier};
use matreg_domain::{MaterialCandidate, NumericInput};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.seen.borrow_mut().push(notification.clone());
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
}

fn steel_rod() -> MaterialCandidate {
    MaterialCandidate {
        code: "M1".to_string(),
        description: "Steel Rod".to_string(),
        unit_cost: NumericInput::Number(10.0),
        quantity: NumericInput::Number(5.0),
        acquisition_date: Some(today()),
        supplier: "ACME".to_string(),
        additional_cost: vec![NumericInput::Number(2.0), NumericInput::from("3")],
    }
}

/// Accept one connection, reply with `status_line`, return the request body
async fn serve_once(status_line: &'static str) -> (Config, JoinHandle<serde_json::Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        let body_start = loop {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "client closed before sending a full request");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..body_start]).to_ascii_lowercase();
        let length: usize = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap_or(0);
        while raw.len() < body_start + length {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0);
            raw.extend_from_slice(&buf[..n]);
        }

        let reply = format!(
            "HTTP/1.1 {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            status_line
        );
        stream.write_all(reply.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        serde_json::from_slice(&raw[body_start..body_start + length]).unwrap()
    });

    let config = Config {
        endpoint: format!("http://{}/api/materials", addr),
        timeout_secs: 5,
        ..Config::default()
    };
    (config, handle)
}

#[tokio::test]
async fn test_created_material_is_posted_with_total() {
    let (config, server) = serve_once("201 Created").await;
    let notifier = RecordingNotifier::default();

    let outcome = register_material(steel_rod(), &config, &notifier, today())
        .await
        .unwrap();

    assert_eq!(outcome.displayed_total, 55.0);
    assert_eq!(
        outcome.report,
        SubmissionReport::Created {
            code: "M1".to_string(),
            total_cost: 55.0
        }
    );

    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, NotificationKind::Success);
    assert_eq!(seen[0].title, "Material M1 cadastrado com sucesso!");

    let body = server.await.unwrap();
    assert_eq!(body["description"], "Steel Rod");
    assert_eq!(body["unitCost"], 10.0);
    assert_eq!(body["additionalCost"], serde_json::json!([2.0, 3.0]));
    assert_eq!(body["totalCost"], 55.0);
}

#[tokio::test]
async fn test_rejected_material_notifies_failure() {
    let (config, server) = serve_once("422 Unprocessable Entity").await;
    let notifier = RecordingNotifier::default();

    let outcome = register_material(steel_rod(), &config, &notifier, today())
        .await
        .unwrap();

    assert_eq!(
        outcome.report,
        SubmissionReport::Rejected {
            code: "M1".to_string(),
            status: 422
        }
    );

    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, NotificationKind::Failure);
    server.await.unwrap();
}
