//! Root component: header, dashboard, footer and the toast overlay.

use leptos::prelude::*;
use lib_claims::DashboardConfig;

use crate::components::{Footer, Header, Toaster};
use crate::pages::DashboardPage;
use crate::state::dashboard::provide_dashboard_context;

#[component]
pub fn App() -> impl IntoView {
    provide_dashboard_context(DashboardConfig::default());

    view! {
        <div class="app-container">
            <Header/>
            <main class="gradient-bg">
                <DashboardPage/>
            </main>
            <Footer/>
            <Toaster/>
        </div>
    }
}
