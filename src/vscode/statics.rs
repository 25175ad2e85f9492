//! The two constant documents: extension recommendations and editor settings
//!
//! Neither varies with the project context.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExtensionsFile {
    pub recommendations: [&'static str; 2],
}

/// Renders the recommended-extension list: the Zig language extension and a
/// native debugger frontend.
pub fn extensions_document() -> ExtensionsFile {
    ExtensionsFile {
        recommendations: ["ziglang.vscode-zig", "vadimcn.vscode-lldb"],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsFile {
    /// Breakpoints in build.zig and other non-debuggee files stay settable
    #[serde(rename = "debug.allowBreakpointsEverywhere")]
    pub allow_breakpoints_everywhere: bool,
    #[serde(rename = "zig.buildOnSave")]
    pub build_on_save: bool,
    #[serde(rename = "editor.tabSize")]
    pub tab_size: u32,
    #[serde(rename = "editor.insertSpaces")]
    pub insert_spaces: bool,
    #[serde(rename = "editor.formatOnSave")]
    pub format_on_save: bool,
}

/// Renders the editor preferences document.
pub fn settings_document() -> SettingsFile {
    SettingsFile {
        allow_breakpoints_everywhere: true,
        build_on_save: false,
        tab_size: 4,
        insert_spaces: true,
        format_on_save: true,
    }
}
