//! McRelly Dark - The flagship theme
//!
//! Deep navy background with the violet to pink to cyan brand gradient.

pub const THEME: &str = r##"# McRelly Dark theme for mcrellyworld
# Deep navy background, violet/pink/cyan brand stops

[meta]
name = "McRelly Dark"
version = 1
author = "mcrellyworld"

[ui]
background = "#0f1020"
foreground = "#e4e4f0"
border = "#3b3d5c"
border_focused = "#a78bfa"
title = "#c4b5fd"
status_bar = "#a1a1c2"
selection_bg = "#2e2a5a"
selection_fg = "#ffffff"
muted = "#8b8ba7"
border_type = "rounded"

[brand]
primary = "#8b5cf6"
secondary = "#ec4899"
accent = "#22d3ee"

[notice]
success = "#34d399"
error = "#f87171"

[code]
inline = "#f0abfc"
block = "#a5f3fc"
"##;
