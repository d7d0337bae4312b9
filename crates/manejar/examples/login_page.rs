//! Login Page Demo - Page Objects Against the Recording Engine
//!
//! Demonstrates defining a page object, driving it through the abstraction
//! layer, and inspecting the exact commands the engine received.
//!
//! # Running
//!
//! ```bash
//! cargo run --example login_page -p manejar
//! ```

#![allow(clippy::unwrap_used)]

use manejar::mock::RecordingEngine;
use manejar::{Control, Driver, ManejarResult, Page};
use std::sync::Arc;

/// The login page of the system under test.
struct LoginPage {
    driver: Driver,
}

impl Page for LoginPage {
    fn driver(&self) -> &Driver {
        &self.driver
    }

    fn url(&self) -> &str {
        "login"
    }
}

impl LoginPage {
    fn new(driver: Driver) -> Self {
        Self { driver }
    }

    fn log_in(&self, user: &str, password: &str) -> ManejarResult<()> {
        self.text_field("username")?.set_value(user)?;
        self.text_field("password")?.set_value(password)?;
        self.button("log-in")?.click_and_wait()
    }
}

fn main() {
    println!("=== Manejar Login Page Demo ===\n");

    let engine = Arc::new(RecordingEngine::new());
    let driver = Driver::new(Arc::clone(&engine) as Arc<dyn manejar::Engine>);
    let page = LoginPage::new(driver.clone());

    // Script what the "browser" will report back.
    engine.set_location("http://shop.example/login");
    engine.add_element("id=log-in");
    engine.mark_visible("id=log-in");
    engine.add_page_text("Welcome back");

    // Drive the page the way a test would.
    page.open().unwrap();
    println!("page is current: {}", page.is_current().unwrap());

    let login_button = driver.button("log-in").unwrap();
    println!("login button present: {}", login_button.is_present().unwrap());
    println!("login button visible: {}", login_button.is_visible().unwrap());

    page.log_in("ada", "s3cret").unwrap();
    println!(
        "welcome text present: {}",
        page.contains_text("Welcome back").unwrap()
    );

    // Every interaction above was dispatched as an engine command.
    println!("\nRecorded engine commands:");
    for command in engine.commands() {
        println!("  {command:?}");
    }

    println!("\n=== Login Page Demo Complete ===");
}
