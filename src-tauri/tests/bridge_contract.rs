use futures::executor::block_on;
use one_shortcut_lib::{
    AutoStartError, BridgeClient, BridgeConfig, BridgeGateway, HostFuture, HostServices,
    LaunchError, LoginItemRegistry, OperationResult, PathPicker, RuntimeMode, Target,
    TargetOpener, PATH_OPENED_MESSAGE, URL_OPENED_MESSAGE,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

struct ScriptedPicker(Option<Vec<String>>);

impl PathPicker for ScriptedPicker {
    fn pick_paths<'a>(&'a self, _title: &'a str) -> HostFuture<'a, Option<Vec<String>>> {
        let picked = self.0.clone();
        Box::pin(async move { picked })
    }
}

/// Succeeds for URLs; for paths, returns the scripted diagnostic.
struct ScriptedOpener {
    path_diagnostic: String,
    routed: Arc<Mutex<Vec<&'static str>>>,
}

impl TargetOpener for ScriptedOpener {
    fn open_url<'a>(&'a self, _url: &'a str) -> HostFuture<'a, Result<(), String>> {
        self.routed.lock().unwrap().push("url");
        Box::pin(async { Ok(()) })
    }

    fn open_path<'a>(&'a self, _path: &'a str) -> HostFuture<'a, Result<String, String>> {
        self.routed.lock().unwrap().push("path");
        let diagnostic = self.path_diagnostic.clone();
        Box::pin(async move { Ok(diagnostic) })
    }
}

struct BrokenLoginItems;

impl LoginItemRegistry for BrokenLoginItems {
    fn register(&self, _exe: &Path) -> Result<(), AutoStartError> {
        Err(AutoStartError::Registry("registry unavailable".to_string()))
    }

    fn unregister(&self, _exe: &Path) -> Result<(), AutoStartError> {
        Err(AutoStartError::Unsupported)
    }
}

fn client(picked: Option<Vec<String>>, path_diagnostic: &str) -> (BridgeClient, Arc<Mutex<Vec<&'static str>>>) {
    let routed = Arc::new(Mutex::new(Vec::new()));
    let host = HostServices {
        picker: Box::new(ScriptedPicker(picked)),
        opener: Box::new(ScriptedOpener {
            path_diagnostic: path_diagnostic.to_string(),
            routed: routed.clone(),
        }),
        login_items: Box::new(BrokenLoginItems),
    };
    let config = BridgeConfig {
        dialog_title: "Select a file, app, or executable".to_string(),
        mode: RuntimeMode::Development,
    };
    let gateway = BridgeGateway::new(host, config);
    (BridgeClient::new(Arc::new(gateway)), routed)
}

#[test]
fn launch_routes_by_web_prefix() {
    let (client, routed) = client(None, "");

    let url = block_on(client.launch_target(Target::new("https://example.com"))).expect("url opens");
    assert_eq!(url, OperationResult::ok(URL_OPENED_MESSAGE));

    let path = block_on(client.launch_target(Target::new("/home/me/notes.md"))).expect("path opens");
    assert_eq!(path, OperationResult::ok(PATH_OPENED_MESSAGE));

    assert_eq!(*routed.lock().unwrap(), vec!["url", "path"]);
}

#[test]
fn launch_surfaces_handler_diagnostic() {
    let (client, _) = client(None, "No application found");

    let err = block_on(client.launch_target(Target::new("/no/such/file")))
        .expect_err("diagnostic should fail the launch");
    assert!(matches!(err, LaunchError::Path(_)));
    assert!(err.to_string().contains("No application found"));
}

#[test]
fn pick_returns_first_or_none() {
    let (cancelled, _) = client(None, "");
    assert_eq!(block_on(cancelled.pick_path()), None);

    let picked = Some(vec!["C:\\Tools\\first.exe".to_string(), "C:\\Tools\\second.exe".to_string()]);
    let (client, _) = client(picked, "");
    assert_eq!(block_on(client.pick_path()), Some(Target::new("C:\\Tools\\first.exe")));
}

#[test]
fn autostart_failures_are_results() {
    let (client, _) = client(None, "");

    let enabled = block_on(client.set_autostart(true));
    assert!(!enabled.success);
    assert_eq!(enabled.message, "Failed to set auto-start: registry unavailable");

    let disabled = block_on(client.set_autostart(false));
    assert!(!disabled.success);
    assert_eq!(
        disabled.message,
        "Failed to set auto-start: autostart is not supported on this platform"
    );
}
