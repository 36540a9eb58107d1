use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
