//! Inline alert panel shown inside the contact form: one message with a
//! severity preset plus an optional row of follow-up action buttons.
//!
//! The form owns a single `Option<AlertState>`; replacing the state is the
//! "show" operation (new message, previous actions cleared), so there is
//! never more than one panel per form and it survives for the life of the
//! page once created.

use stylist::css;
use stylist::yew::styled_component;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "alert-info",
            Severity::Success => "alert-success",
            Severity::Error => "alert-error",
        }
    }
}

/// Visual weight of an alert action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Primary,
    Outline,
}

#[derive(Clone, PartialEq)]
pub struct AlertAction {
    pub label: AttrValue,
    pub kind: ActionKind,
    pub on_click: Callback<MouseEvent>,
}

#[derive(Clone, PartialEq)]
pub struct AlertState {
    pub message: AttrValue,
    pub severity: Severity,
    pub actions: Vec<AlertAction>,
}

impl AlertState {
    /// New panel content. Starts with no actions, so assigning the result
    /// over the previous state replaces the message and clears the buttons
    /// in one step.
    pub fn show(message: impl Into<AttrValue>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            actions: Vec::new(),
        }
    }

    /// Appends an action button; actions render in call order. Clicking one
    /// runs its callback without closing the panel.
    pub fn push_action(
        &mut self,
        label: impl Into<AttrValue>,
        kind: ActionKind,
        on_click: Callback<MouseEvent>,
    ) {
        self.actions.push(AlertAction {
            label: label.into(),
            kind,
            on_click,
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertPanelProps {
    pub state: AlertState,
}

#[styled_component(AlertPanel)]
pub fn alert_panel(props: &AlertPanelProps) -> Html {
    let state = &props.state;
    let panel = css!(
        r#"
        display: flex;
        align-items: center;
        justify-content: space-between;
        flex-wrap: wrap;
        gap: 12px;
        padding: 12px;
        border-radius: 8px;
        margin-bottom: 1rem;

        &.alert-info {
            background: #fff7ed;
            color: #92400e;
        }
        &.alert-success {
            background: #d1fae5;
            color: #065f46;
        }
        &.alert-error {
            background: #fee2e2;
            color: #991b1b;
        }

        .alert-actions {
            display: flex;
            gap: 8px;
            flex-wrap: wrap;
        }
    "#
    );

    html! {
        <div
            class={classes!("form-alert", panel, state.severity.css_class())}
            data-type={state.severity.as_str()}
            role="status"
        >
            <div class="alert-message">{ state.message.clone() }</div>
            <div class="alert-actions">
                { for state.actions.iter().map(|action| {
                    let kind_class = match action.kind {
                        ActionKind::Primary => "btn-primary",
                        ActionKind::Outline => "btn-outline",
                    };
                    let onclick = {
                        let on_click = action.on_click.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            on_click.emit(event);
                        })
                    };
                    html! {
                        <button type="button" class={classes!("btn", kind_class)} {onclick}>
                            { action.label.clone() }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_starts_with_no_actions() {
        let state = AlertState::show("Sending message — please wait...", Severity::Info);
        assert_eq!(&*state.message, "Sending message — please wait...");
        assert_eq!(state.severity, Severity::Info);
        assert!(state.actions.is_empty());
    }

    #[test]
    fn actions_accumulate_in_call_order() {
        let mut state = AlertState::show("Prefilled the contact form for: Pro Plan", Severity::Info);
        state.push_action("Send now", ActionKind::Primary, Callback::noop());
        state.push_action("Edit details", ActionKind::Outline, Callback::noop());
        state.push_action("Chat on WhatsApp", ActionKind::Outline, Callback::noop());

        let labels: Vec<_> = state.actions.iter().map(|a| &*a.label).collect();
        assert_eq!(labels, ["Send now", "Edit details", "Chat on WhatsApp"]);
        assert_eq!(state.actions[0].kind, ActionKind::Primary);
        assert_eq!(state.actions[1].kind, ActionKind::Outline);
    }

    #[test]
    fn replacing_the_state_clears_previous_actions() {
        let mut state = AlertState::show("first", Severity::Info);
        state.push_action("Send now", ActionKind::Primary, Callback::noop());

        state = AlertState::show("second", Severity::Error);
        assert_eq!(&*state.message, "second");
        assert_eq!(state.severity, Severity::Error);
        assert!(state.actions.is_empty());
    }

    #[test]
    fn severity_maps_to_stable_dataset_values() {
        assert_eq!(Severity::Info.as_str(), "info");
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Error.as_str(), "error");
    }
}
