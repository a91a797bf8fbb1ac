//! Integration tests for the pkgdash handler layer
//!
//! These tests wire a full handler context the way an embedding web
//! layer would and exercise the query surface end-to-end.

use std::sync::Arc;

use pkgdash_client::MemoryClient;
use pkgdash_config::Config;
use pkgdash_events::{AppEvent, EventReceiver, PackageEvent};
use pkgdash_handler::{all_packages, package_payload, HandlerCtx, QueryResult};
use pkgdash_progress::{Operation, OperationTracker};
use pkgdash_types::{
    PackageDescriptor, PackageFilter, PackageId, PackageStatus, PackageType, ServiceDescriptor,
    ServicePort,
};

struct TestEnvironment {
    ctx: HandlerCtx,
    events: EventReceiver,
}

impl TestEnvironment {
    fn new(client: MemoryClient) -> Self {
        let (tx, events) = pkgdash_events::channel();

        let ctx = HandlerCtx::builder()
            .with_client(Arc::new(client))
            .with_tracker(OperationTracker::new())
            .with_config(Config::default())
            .with_event_sender(tx)
            .build()
            .expect("handler ctx");

        Self { ctx, events }
    }

    fn next_package_event(&mut self) -> PackageEvent {
        match self.events.try_recv().expect("pending event") {
            AppEvent::Package(event) => event,
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

fn descriptor(name: &str, origin: &str, version: &str) -> PackageDescriptor {
    PackageDescriptor {
        name: name.to_string(),
        origin: origin.to_string(),
        version: version.to_string(),
        package_type: PackageType::App,
        description: format!("{name} demo package"),
        icon: String::new(),
        download_size: 512,
        installed_size: 4096,
        status: PackageStatus::Installed,
    }
}

#[tokio::test]
async fn listing_sorts_and_reports_events() {
    let mut env = TestEnvironment::new(MemoryClient::new().with_packages([
        descriptor("webcam", "canonical", "1.1"),
        descriptor("chatroom", "ogra", "0.1-8"),
        descriptor("editor", "canonical", "3.0"),
    ]));

    let packages = all_packages(&env.ctx, &PackageFilter::default())
        .await
        .expect("list");

    let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["chatroom", "editor", "webcam"]);

    assert!(matches!(env.next_package_event(), PackageEvent::ListStarting));
    match env.next_package_event() {
        PackageEvent::ListCompleted { count } => assert_eq!(count, 3),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn payload_round_trip_with_tracker_and_services() {
    let chatroom: PackageId = "chatroom.ogra".parse().expect("id");
    let client = MemoryClient::new()
        .with_package(descriptor("chatroom", "ogra", "0.1-8"))
        .with_services(
            chatroom.clone(),
            vec![ServiceDescriptor {
                name: "web".to_string(),
                ports: vec![ServicePort {
                    name: "ui".to_string(),
                    port: 4200,
                    external: true,
                }],
            }],
        );
    let mut env = TestEnvironment::new(client);

    // While an install is tracked the payload reads installing.
    env.ctx.tracker.add(chatroom.clone(), Operation::Install);
    let pkg = package_payload(&env.ctx, &chatroom).await.expect("payload");
    assert_eq!(pkg.status, PackageStatus::Installing);
    assert_eq!(pkg.ui_port, 4200);
    assert_eq!(pkg.icon, "/icons/chatroom.ogra_icon.png");

    // Once the operation clears, the daemon status shows through again.
    env.ctx.tracker.done(&chatroom);
    let pkg = package_payload(&env.ctx, &chatroom).await.expect("payload");
    assert_eq!(pkg.status, PackageStatus::Installed);

    assert!(matches!(
        env.next_package_event(),
        PackageEvent::QueryStarting { .. }
    ));
    match env.next_package_event() {
        PackageEvent::QueryCompleted { package } => assert_eq!(package, "chatroom.ogra"),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn query_results_serialize_for_the_web_layer() {
    let env = TestEnvironment::new(
        MemoryClient::new().with_package(descriptor("chatroom", "ogra", "0.1-8")),
    );

    let packages = all_packages(&env.ctx, &PackageFilter::default())
        .await
        .expect("list");
    let json = QueryResult::PackageList(packages).to_json().expect("json");
    assert!(json.contains("\"type\": \"PackageList\""));
    assert!(json.contains("\"chatroom\""));

    let payload = package_payload(&env.ctx, &"chatroom.ogra".parse().expect("id"))
        .await
        .expect("payload");
    let json = QueryResult::Package(payload).to_json().expect("json");
    assert!(json.contains("\"uiPort\": 0"));
    assert!(json.contains("\"id\": \"chatroom.ogra\""));
}
