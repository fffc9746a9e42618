//! Browser entrypoint: starts logging and mounts the OpuDoc site on `<body>`.

// Dependencies belong to the library; the binary only mounts it.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use opudoc_landing::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
