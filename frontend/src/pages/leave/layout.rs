use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn LeaveLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="flex gap-6">
                {children()}
            </div>
        </Layout>
    }
}
