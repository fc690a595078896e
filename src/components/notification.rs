use yew::prelude::*;

/// Payload for the transient bottom-right toast.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationData {
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub data: NotificationData,
}

/// Bottom-right info toast: status icon, fixed title, short description.
/// The owner decides when it appears and disappears.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    html! {
        <div class="notification bottom-right">
            <span class="notification-icon">{props.data.icon}</span>
            <div class="notification-body">
                <div class="notification-title">{"Transport application approval"}</div>
                <div class="notification-description">{props.data.description}</div>
            </div>
        </div>
    }
}
