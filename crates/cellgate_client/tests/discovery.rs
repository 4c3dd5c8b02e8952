mod common;

use cellgate_client::{
    AdminClient, AdminRequest, AdminResponse, AppClient, AppInfo, AppRequest, AppResponse,
    AppStatus, CallError, CellId, DnaHash, InstalledCell, TransportError, WireError,
};
use common::{admin_handler, app_handler, test_agent_key, test_cell_id, test_dna_hash, StubTransport};

fn spare_cell_id() -> CellId {
    CellId::new(DnaHash::from_core_bytes([9; 32]), test_agent_key())
}

fn numbers_app_info() -> AppInfo {
    AppInfo {
        installed_app_id: "numbers".to_string(),
        cell_data: vec![
            InstalledCell {
                cell_id: test_cell_id(),
                role_name: "numbers".to_string(),
            },
            InstalledCell {
                cell_id: spare_cell_id(),
                role_name: "spare".to_string(),
            },
        ],
        status: AppStatus::Running,
    }
}

#[tokio::test]
async fn discovery_returns_the_first_reported_cell() {
    let (transport, _) = StubTransport::new(app_handler(|request| match request {
        AppRequest::AppInfo { installed_app_id } => {
            assert_eq!(installed_app_id, "numbers");
            Ok(AppResponse::AppInfo(Some(numbers_app_info())))
        }
        other => panic!("unexpected request: {other:?}"),
    }));
    let client = AppClient::new(transport);

    let cell_id = client.discover_cell_id("numbers").await.unwrap();
    assert_eq!(cell_id, test_cell_id());
}

#[tokio::test]
async fn unknown_app_is_app_not_found() {
    let (transport, _) = StubTransport::new(app_handler(|_| Ok(AppResponse::AppInfo(None))));
    let client = AppClient::new(transport);

    let err = client.discover_cell_id("nowhere").await.unwrap_err();
    match err {
        CallError::AppNotFound(app_id) => assert_eq!(app_id, "nowhere"),
        other => panic!("expected AppNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn app_with_zero_cells_is_no_cells_installed() {
    let (transport, _) = StubTransport::new(app_handler(|_| {
        Ok(AppResponse::AppInfo(Some(AppInfo {
            installed_app_id: "numbers".to_string(),
            cell_data: vec![],
            status: AppStatus::Disabled,
        })))
    }));
    let client = AppClient::new(transport);

    let err = client.discover_cell_id("numbers").await.unwrap_err();
    match err {
        CallError::NoCellsInstalled(app_id) => assert_eq!(app_id, "numbers"),
        other => panic!("expected NoCellsInstalled, got {other:?}"),
    }
}

#[tokio::test]
async fn admin_listings_come_back_typed() {
    let (transport, _) = StubTransport::new(admin_handler(|request| match request {
        AdminRequest::ListDnas => Ok(AdminResponse::DnasListed(vec![test_dna_hash()])),
        AdminRequest::ListCellIds => Ok(AdminResponse::CellIdsListed(vec![test_cell_id()])),
    }));
    let client = AdminClient::new(transport);

    let dnas = client.list_dnas().await.unwrap();
    assert_eq!(dnas, vec![test_dna_hash()]);

    let cell_ids = client.list_cell_ids().await.unwrap();
    assert_eq!(cell_ids, vec![test_cell_id()]);

    client.close().await.unwrap();
}

#[tokio::test]
async fn admin_remote_failure_surfaces_verbatim() {
    let (transport, _) = StubTransport::new(admin_handler(|_| {
        Ok(AdminResponse::Error(WireError::internal(
            "runtime unavailable",
        )))
    }));
    let client = AdminClient::new(transport);

    let err = client.list_dnas().await.unwrap_err();
    assert!(matches!(
        err,
        CallError::Remote(WireError::InternalError(_))
    ));
}

#[tokio::test]
async fn admin_transport_failure_is_fail_fast() {
    let (transport, _) = StubTransport::new(|_| {
        Err(TransportError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        )))
    });
    let client = AdminClient::new(transport);

    let err = client.list_cell_ids().await.unwrap_err();
    assert!(matches!(err, CallError::Transport(TransportError::Io(_))));
}
