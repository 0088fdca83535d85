//! Handles querying workspace state through `i3-msg`.

use std::process::Command;

use crate::{error::Error, process, screenshot::WorkspaceSource, Rect};

/// The IPC client used unless another one is configured.
pub(crate) const DEFAULT_CLIENT: &str = "i3-msg";

/// A workspace as reported by `get_workspaces`.
///
/// Only the fields needed to locate the focused output are kept.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub(crate) struct Workspace {
    /// The workspace name, used for logging only.
    #[serde(default)]
    pub(crate) name: String,
    /// Whether the workspace currently has focus.
    pub(crate) focused: bool,
    /// The area the workspace covers on the root window.
    pub(crate) rect: Rect,
}

/// Decodes the JSON array printed by `get_workspaces`.
pub(crate) fn parse_workspaces(json: &[u8]) -> Result<Vec<Workspace>, Error> {
    Ok(serde_json::from_slice(json)?)
}

/// Returns the first focused workspace, ignoring any later ones.
pub(crate) fn focused_workspace(workspaces: &[Workspace]) -> Result<&Workspace, Error> {
    workspaces
        .iter()
        .find(|workspace| workspace.focused)
        .ok_or(Error::NoFocusedWorkspace {
            count: workspaces.len(),
        })
}

/// An i3 IPC client program such as `i3-msg` or `swaymsg`.
#[derive(Debug, Clone)]
pub(crate) struct Msg {
    /// The program to invoke.
    program: String,
}

impl Msg {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Msg {
            program: program.into(),
        }
    }
}

impl WorkspaceSource for Msg {
    fn workspaces(&self) -> Result<Vec<Workspace>, Error> {
        let output = process::run(Command::new(&self.program).args(["-t", "get_workspaces"]))?;

        parse_workspaces(&output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_OUTPUTS: &str = r#"[
        {"num": 1, "name": "1", "visible": true, "focused": false, "urgent": false,
         "output": "DP-1", "rect": {"x": 0, "y": 0, "width": 1920, "height": 1080}},
        {"num": 2, "name": "2: web", "visible": true, "focused": true, "urgent": false,
         "output": "HDMI-1", "rect": {"x": 1920, "y": 0, "width": 1280, "height": 1024}}
    ]"#;

    fn workspace(focused: bool, x: i32) -> Workspace {
        Workspace {
            name: String::new(),
            focused,
            rect: Rect {
                x,
                y: 0,
                width: 800,
                height: 600,
            },
        }
    }

    #[test]
    fn parses_i3_output_ignoring_extra_fields() {
        let workspaces = parse_workspaces(TWO_OUTPUTS.as_bytes()).unwrap();

        assert_eq!(workspaces.len(), 2);
        assert_eq!(workspaces[1].name, "2: web");
        assert!(workspaces[1].focused);
        assert_eq!(
            workspaces[1].rect,
            Rect {
                x: 1920,
                y: 0,
                width: 1280,
                height: 1024,
            }
        );
    }

    #[test]
    fn name_is_optional() {
        let json = br#"[{"focused": true, "rect": {"x": -1280, "y": -200, "width": 1280, "height": 1024}}]"#;
        let workspaces = parse_workspaces(json).unwrap();

        assert_eq!(workspaces[0].name, "");
        assert_eq!(workspaces[0].rect.x, -1280);
        assert_eq!(workspaces[0].rect.y, -200);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_workspaces(b"ERROR: Could not connect to i3").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn rejects_unexpected_shape() {
        let cases: [&[u8]; 4] = [
            br#"{"focused": true}"#,
            br#"[{"focused": true}]"#,
            br#"[{"focused": "yes", "rect": {"x": 0, "y": 0, "width": 1, "height": 1}}]"#,
            b"",
        ];
        for json in cases {
            assert!(
                matches!(parse_workspaces(json), Err(Error::MalformedResponse(_))),
                "{}",
                String::from_utf8_lossy(json)
            );
        }
    }

    #[test]
    fn picks_the_focused_workspace() {
        let workspaces = parse_workspaces(TWO_OUTPUTS.as_bytes()).unwrap();
        assert_eq!(focused_workspace(&workspaces).unwrap().name, "2: web");
    }

    #[test]
    fn first_focused_workspace_wins() {
        let workspaces = [workspace(false, 0), workspace(true, 800), workspace(true, 1600)];
        assert_eq!(focused_workspace(&workspaces).unwrap().rect.x, 800);
    }

    #[test]
    fn no_focused_workspace_is_an_error() {
        let workspaces = [workspace(false, 0), workspace(false, 800)];
        let err = focused_workspace(&workspaces).unwrap_err();
        assert!(matches!(err, Error::NoFocusedWorkspace { count: 2 }));

        assert!(matches!(
            focused_workspace(&[]),
            Err(Error::NoFocusedWorkspace { count: 0 })
        ));
    }

    #[test]
    fn failing_client_is_reported() {
        let err = Msg::new("false").workspaces().unwrap_err();
        assert!(matches!(err, Error::ToolFailed { .. }));
    }

    #[test]
    fn missing_client_is_reported() {
        let err = Msg::new("wsshot-test-no-such-client").workspaces().unwrap_err();
        assert!(matches!(err, Error::ToolLaunch { .. }));
    }

    #[test]
    fn silent_client_output_is_malformed() {
        let err = Msg::new("true").workspaces().unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }
}
