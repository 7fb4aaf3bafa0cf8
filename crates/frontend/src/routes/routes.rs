//! Route tree: the shell is the parent view, every screen renders into its
//! outlet. All menu paths live under `/dashboard`; unknown paths inside the
//! shell fall through to the wildcard placeholder.

use crate::layout::Shell;
use crate::pages::{DashboardHome, NotFound, SectionPage};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard" /> } />
                <ParentRoute path=path!("/dashboard") view=Shell>
                    <Route path=path!("") view=DashboardHome />
                    <Route path=path!("*rest") view=SectionPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
