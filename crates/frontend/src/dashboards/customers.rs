use super::demo_data::{demo_customers, store_customer, Customer};
use crate::layout::global_context::RegionOverlay;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::confirm_modal::ConfirmModal;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::shared::form_field::{select_is_filled, FieldState};
use contracts::shared::overlay::{ConfirmVariant, ModalSize};
use contracts::shared::site::plan_options;
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlays of the customers region. One at a time.
#[derive(Debug, Clone, PartialEq)]
enum CustomerOverlay {
    Add,
    Deactivate(Customer),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub plan: String,
    pub waiver_signed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub plan: Option<String>,
    pub waiver: Option<String>,
}

impl CustomerErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.plan.is_none() && self.waiver.is_none()
    }
}

/// Field checks for the add-customer form.
pub fn validate_customer(draft: &CustomerDraft) -> CustomerErrors {
    let email = draft.email.trim();
    CustomerErrors {
        name: draft
            .name
            .trim()
            .is_empty()
            .then(|| "Name is required".to_string()),
        email: if email.is_empty() {
            Some("Email is required".to_string())
        } else if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            Some("Enter a valid email address".to_string())
        } else {
            None
        },
        plan: (!select_is_filled(&draft.plan)).then(|| "Choose a plan".to_string()),
        waiver: (!draft.waiver_signed).then(|| "The liability waiver must be signed".to_string()),
    }
}

/// State of every field of the add form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerFields {
    pub name: FieldState,
    pub email: FieldState,
    pub plan: FieldState,
    pub waiver: FieldState<bool>,
}

impl CustomerFields {
    pub fn draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            plan: self.plan.value.clone(),
            waiver_signed: self.waiver.value,
        }
    }

    /// Shows the validator's messages; fields without one are cleared.
    pub fn apply_errors(&mut self, errors: CustomerErrors) {
        self.name.set_error(errors.name);
        self.email.set_error(errors.email);
        self.plan.set_error(errors.plan);
        self.waiver.set_error(errors.waiver);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.name.loading = loading;
        self.email.loading = loading;
        self.plan.loading = loading;
        self.waiver.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.name.loading
    }

    /// Validates and returns the draft when it can be saved. Refuses while a
    /// save is already running.
    pub fn submit(&mut self) -> Option<CustomerDraft> {
        if self.is_loading() {
            return None;
        }
        let draft = self.draft();
        let errors = validate_customer(&draft);
        let valid = errors.is_empty();
        self.apply_errors(errors);
        valid.then_some(draft)
    }
}

/// Row stored for `draft`. Ids continue after the largest existing one.
pub fn customer_from_draft(existing: &[Customer], draft: CustomerDraft) -> Customer {
    Customer {
        id: existing.iter().map(|c| c.id).max().unwrap_or(0) + 1,
        name: draft.name.trim().to_string(),
        email: draft.email.trim().to_string(),
        plan: draft.plan,
        active: true,
    }
}

/// Members (admin) or the trainer's clients.
#[component]
pub fn CustomersList(role: Role) -> impl IntoView {
    let customers = RwSignal::new(demo_customers(role));
    let overlay = RegionOverlay::<CustomerOverlay>::new("customers");
    // Add form is being stored
    let saving = RwSignal::new(false);

    let (title, noun) = match role {
        Role::Admin => ("Customers", "customer"),
        Role::PersonalTrainer => ("My Clients", "client"),
    };

    let add_open =
        Signal::derive(move || overlay.with(|o| o.props() == Some(&CustomerOverlay::Add)));
    let deactivate_open = Signal::derive(move || {
        overlay.with(|o| matches!(o.props(), Some(CustomerOverlay::Deactivate(_))))
    });
    let deactivate_message = Signal::derive(move || {
        overlay.with(|o| match o.props() {
            Some(CustomerOverlay::Deactivate(c)) => {
                format!("{} will no longer be able to book classes.", c.name)
            }
            _ => String::new(),
        })
    });

    let close = Callback::new(move |_| {
        if !saving.get_untracked() {
            overlay.close();
        }
    });

    let save = Callback::new(move |draft: CustomerDraft| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let customer = customers.with_untracked(|list| customer_from_draft(list, draft));
        spawn_local(async move {
            match store_customer(customer).await {
                Ok(stored) => {
                    log::info!("{} {} added", noun, stored.id);
                    customers.try_update(|list| list.push(stored));
                    saving.try_set(false);
                    overlay.close();
                }
                Err(err) => {
                    log::error!("saving {} failed: {}", noun, err);
                    saving.try_set(false);
                }
            }
        });
    });

    let deactivate = Callback::new(move |_| {
        let Some(CustomerOverlay::Deactivate(target)) = overlay.close() else {
            return;
        };
        customers.update(|list| {
            if let Some(c) = list.iter_mut().find(|c| c.id == target.id) {
                c.active = false;
            }
        });
    });

    view! {
        <div class="customers">
            <PageHeader
                title=title
                subtitle=Signal::derive(move || format!("{} total", customers.with(Vec::len)))
            >
                <Button on_click=Callback::new(move |_| {
                    overlay.open(CustomerOverlay::Add);
                })>
                    {icon("plus")}
                    {format!("Add {noun}")}
                </Button>
            </PageHeader>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Plan"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || customers.get()
                        key=|c| (c.id, c.active)
                        children=move |c: Customer| {
                            let row = c.clone();
                            let active = c.active;
                            view! {
                                <tr class:table__row--inactive=!active>
                                    <td>{c.name}</td>
                                    <td>{c.email}</td>
                                    <td>{c.plan}</td>
                                    <td>{if active { "Active" } else { "Inactive" }}</td>
                                    <td class="table__actions">
                                        <Show when=move || active>
                                            {
                                                let row = row.clone();
                                                view! {
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        on_click=Callback::new(move |_| {
                                                            overlay.open(CustomerOverlay::Deactivate(row.clone()));
                                                        })
                                                    >
                                                        "Deactivate"
                                                    </Button>
                                                }
                                            }
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Modal
                is_open=add_open
                on_close=close
                title=format!("Add {noun}")
                size=ModalSize::Md
                can_close=Signal::derive(move || !saving.get())
            >
                <CustomerForm on_save=save on_cancel=close saving=saving />
            </Modal>

            <ConfirmModal
                is_open=deactivate_open
                on_close=close
                on_confirm=deactivate
                title=format!("Deactivate {noun}?")
                message=deactivate_message
                variant=ConfirmVariant::Warning
                confirm_text="Deactivate".to_string()
            />
        </div>
    }
}

/// Form inside the add modal. Its fields live only as long as the modal is open.
#[component]
fn CustomerForm(
    on_save: Callback<CustomerDraft>,
    on_cancel: Callback<()>,
    /// Set by the list while the draft is being stored
    #[prop(into)]
    saving: Signal<bool>,
) -> impl IntoView {
    // Errors are shown only after the first submit attempt
    let fields = RwSignal::new(CustomerFields::default());

    Effect::new(move |_| {
        let loading = saving.get();
        fields.update(|f| f.set_loading(loading));
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(draft) = fields.try_update(CustomerFields::submit).flatten() {
            on_save.run(draft);
        }
    };

    let loading = Signal::derive(move || fields.with(CustomerFields::is_loading));

    view! {
        <form class="form" novalidate=true on:submit=submit>
            <Input
                label="Full name".to_string()
                value=Signal::derive(move || fields.with(|f| f.name.value.clone()))
                on_input=Callback::new(move |v: String| fields.update(|f| f.name.value = v))
                error=Signal::derive(move || fields.with(|f| f.name.error.clone()))
                disabled=Signal::derive(move || fields.with(|f| f.name.is_disabled()))
                required=true
            />
            <Input
                label="Email".to_string()
                input_type="email".to_string()
                value=Signal::derive(move || fields.with(|f| f.email.value.clone()))
                on_input=Callback::new(move |v: String| fields.update(|f| f.email.value = v))
                error=Signal::derive(move || fields.with(|f| f.email.error.clone()))
                disabled=Signal::derive(move || fields.with(|f| f.email.is_disabled()))
                required=true
            />
            <Select
                label="Plan".to_string()
                placeholder="Choose a plan".to_string()
                value=Signal::derive(move || fields.with(|f| f.plan.value.clone()))
                on_change=Callback::new(move |v: String| fields.update(|f| f.plan.value = v))
                options=plan_options()
                error=Signal::derive(move || fields.with(|f| f.plan.error.clone()))
                disabled=Signal::derive(move || fields.with(|f| f.plan.is_disabled()))
                required=true
            />
            <Checkbox
                label="Liability waiver signed".to_string()
                checked=Signal::derive(move || fields.with(|f| f.waiver.value))
                on_change=Callback::new(move |v: bool| fields.update(|f| f.waiver.value = v))
                error=Signal::derive(move || fields.with(|f| f.waiver.error.clone()))
                disabled=Signal::derive(move || fields.with(|f| f.waiver.is_disabled()))
            />
            <div class="form__actions">
                <Button
                    variant="secondary"
                    disabled=loading
                    on_click=Callback::new(move |_| on_cancel.run(()))
                >
                    "Cancel"
                </Button>
                <Button button_type="submit" is_loading=loading>
                    "Save"
                </Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CustomerDraft {
        CustomerDraft {
            name: "Ada Byron".into(),
            email: "ada@example.com".into(),
            plan: "standard".into(),
            waiver_signed: true,
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate_customer(&filled()).is_empty());
    }

    #[test]
    fn test_empty_draft_flags_every_field() {
        let errors = validate_customer(&CustomerDraft::default());
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.plan.as_deref(), Some("Choose a plan"));
        assert!(errors.waiver.is_some());
    }

    #[test]
    fn test_placeholder_plan_is_not_a_choice() {
        let draft = CustomerDraft {
            plan: String::new(),
            ..filled()
        };
        let errors = validate_customer(&draft);
        assert!(errors.plan.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_malformed_email() {
        let draft = CustomerDraft {
            email: "ada@".into(),
            ..filled()
        };
        assert_eq!(
            validate_customer(&draft).email.as_deref(),
            Some("Enter a valid email address")
        );
    }

    #[test]
    fn test_submit_routes_errors_into_fields() {
        let mut fields = CustomerFields::default();
        fields.email.value = "ada@".into();

        assert_eq!(fields.submit(), None);
        assert_eq!(fields.name.error.as_deref(), Some("Name is required"));
        assert_eq!(fields.email.error.as_deref(), Some("Enter a valid email address"));
        assert!(fields.plan.has_error());
        assert!(fields.waiver.has_error());

        fields.name.value = "Ada Byron".into();
        fields.email.value = "ada@example.com".into();
        fields.plan.value = "standard".into();
        fields.waiver.value = true;
        assert_eq!(fields.submit(), Some(filled()));
        assert!(!fields.name.has_error() && !fields.waiver.has_error());
    }

    #[test]
    fn test_loading_disables_every_field_and_blocks_submit() {
        let mut fields = CustomerFields {
            name: FieldState::new("Ada Byron".into()),
            email: FieldState::new("ada@example.com".into()),
            plan: FieldState::new("standard".into()),
            waiver: FieldState::new(true),
        };
        fields.set_loading(true);

        assert!(fields.name.is_disabled());
        assert!(fields.email.is_disabled());
        assert!(fields.plan.is_disabled());
        assert!(fields.waiver.is_disabled());
        assert_eq!(fields.submit(), None);

        fields.set_loading(false);
        assert!(!fields.plan.is_disabled());
        assert!(fields.submit().is_some());
    }

    #[test]
    fn test_new_customer_id_follows_largest() {
        let existing = demo_customers(Role::Admin);
        let max = existing.iter().map(|c| c.id).max().unwrap_or(0);
        let customer = customer_from_draft(
            &existing,
            CustomerDraft {
                name: "  Ada Byron ".into(),
                ..filled()
            },
        );
        assert_eq!(customer.id, max + 1);
        assert_eq!(customer.name, "Ada Byron");
        assert!(customer.active);
        assert_eq!(customer_from_draft(&[], filled()).id, 1);
    }
}
