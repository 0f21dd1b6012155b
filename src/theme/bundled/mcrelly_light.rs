//! McRelly Light - Light variant of the brand theme

pub const THEME: &str = r##"# McRelly Light theme for mcrellyworld

[meta]
name = "McRelly Light"
version = 1
author = "mcrellyworld"

[ui]
background = "#fafafc"
foreground = "#1e1b2e"
border = "#c9c6dd"
border_focused = "#7c3aed"
title = "#6d28d9"
status_bar = "#4b4763"
selection_bg = "#ede9fe"
selection_fg = "#1e1b2e"
muted = "#6b6783"
border_type = "rounded"

[brand]
primary = "#7c3aed"
secondary = "#db2777"
accent = "#0891b2"

[notice]
success = "#059669"
error = "#dc2626"

[code]
inline = "#a21caf"
block = "#0e7490"
"##;
