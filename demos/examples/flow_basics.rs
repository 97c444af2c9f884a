// Copyright 2026 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow basics.
//!
//! This minimal example runs a mixed flow through one coordinator: the leading
//! pushes land on the stack, the first non-push request becomes the overlay,
//! and the rest waits as the overlay's remainder.
//!
//! Run:
//! - `cargo run -p wayfind_demos --example flow_basics`

use wayfind_coordinator::CoordinatorTree;
use wayfind_flow::{Flow, Request, Screen};

#[derive(Clone, Debug, PartialEq)]
enum Page {
    Home,
    Search,
    Results,
    Filters,
    SavedSearches,
}

impl Screen for Page {
    type Id = &'static str;
    fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Search => "search",
            Page::Results => "results",
            Page::Filters => "filters",
            Page::SavedSearches => "saved-searches",
        }
    }
}

fn main() {
    let mut tree: CoordinatorTree<Page> = CoordinatorTree::new();
    let root = tree.insert_root();

    let flow: Flow<Page> = vec![
        Request::push(Page::Home),
        Request::push(Page::Search),
        Request::push(Page::Results),
        Request::sheet(Page::Filters),
        Request::push(Page::SavedSearches),
    ]
    .into();

    tree.navigate_flow(root, flow, Some(Box::new(|r| println!("flow completed: {r:?}"))));
    tree.settle();

    println!("== Stack (push order) ==");
    for request in tree.stack(root) {
        println!("  {:?}", request.screen);
    }

    if let Some(sheet) = tree.sheet(root) {
        println!("== Sheet ==");
        println!("  presenting {:?}", sheet.request().screen);
        match sheet.remaining() {
            Some(rest) => println!("  remainder: {:?}", rest.screens()),
            None => println!("  remainder: none"),
        }
    }
}
