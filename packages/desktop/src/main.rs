use dioxus::prelude::*;
use views::{Details, Edit, Home, Login, NavBar, Post, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/post")]
        Post {},
        #[route("/edit/:id")]
        Edit { id: String },
        #[route("/details/:id")]
        Details { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}
