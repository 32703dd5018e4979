use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the extension
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=format!("/icons/{name}.svg")
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_UP: &str = "arrow-up";
    pub const BRIEFCASE: &str = "briefcase";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const EDIT: &str = "edit";
    pub const LOGOUT: &str = "logout";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const PHONE: &str = "phone";
    pub const PLUS: &str = "plus";
    pub const STAR: &str = "star";
    pub const TRASH: &str = "trash";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
}
