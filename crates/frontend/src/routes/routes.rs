use crate::domain::a001_object::ui::list::ObjectList;
use crate::domain::a002_unit::ui::list::UnitList;
use crate::domain::a003_category::ui::list::CategoryList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_order::ui::list::OrderList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <RequireAuth>
                    <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/orders" /> } />
                        <Route path=path!("/objects") view=ObjectList />
                        <Route path=path!("/units") view=UnitList />
                        <Route path=path!("/categories") view=CategoryList />
                        <Route path=path!("/products") view=ProductList />
                        <Route path=path!("/orders") view=OrderList />
                        <Route path=path!("/users") view=UsersList />
                    </Routes>
                </RequireAuth>
            </Shell>
        </Router>
    }
}
