use api::ApiClient;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use store::AppConfig;

use ui::{AuthProvider, ToastProvider};
use views::{Dashboard, ForgotPassword, GuestOnly, NotFound, PrivateRoute, ResetPassword, SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(GuestOnly)]
        #[route("/")]
        SignIn {},
        #[route("/signup")]
        SignUp {},
        #[route("/forgot-password")]
        ForgotPassword {},
        #[route("/reset-password?:token")]
        ResetPassword { token: String },
    #[end_layout]
    #[layout(PrivateRoute)]
        #[route("/dashboard")]
        Dashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG: &str = include_str!("../gobarber.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::parse_or_default(CONFIG));
    let client = use_hook(|| {
        ApiClient::new(&config.api.base_url).expect("api.base_url in gobarber.toml is not a valid URL")
    });

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            duration_ms: config.toast.duration_ms,
            AuthProvider {
                client,
                Router::<Route> {}
            }
        }
    }
}
