//! Nord - Arctic, north-bluish color palette

pub const THEME: &str = r##"# Nord theme for mcrellyworld
# Arctic, north-bluish color palette

[meta]
name = "Nord"
version = 1
author = "Arctic Ice Studio"

[ui]
background = "#2e3440"
foreground = "#d8dee9"
border = "#4c566a"
border_focused = "#ebcb8b"
title = "#88c0d0"
status_bar = "#d8dee9"
selection_bg = "#434c5e"
selection_fg = "#eceff4"
muted = "#7b88a1"

[brand]
primary = "#81a1c1"
secondary = "#b48ead"
accent = "#88c0d0"

[notice]
success = "#a3be8c"
error = "#bf616a"
"##;
