use super::demo_data::{demo_bookings, Booking};
use crate::shared::components::ui::Button;
use crate::shared::components::PageHeader;
use crate::shared::confirm_modal::ConfirmModal;
use crate::shared::icons::icon;
use crate::layout::global_context::RegionOverlay;
use contracts::shared::overlay::ConfirmVariant;
use contracts::system::auth::Role;
use leptos::prelude::*;

/// Today's bookings (admin) or the trainer's own schedule.
#[component]
pub fn BookingsList(role: Role) -> impl IntoView {
    let bookings = RwSignal::new(demo_bookings(role));
    // Booking awaiting cancel confirmation
    let overlay = RegionOverlay::<Booking>::new("bookings");

    let title = match role {
        Role::Admin => "Bookings",
        Role::PersonalTrainer => "My Schedule",
    };

    let is_open = Signal::derive(move || overlay.with(|o| o.is_open()));
    let message = Signal::derive(move || {
        overlay.with(|o| {
            o.props()
                .map(|b| {
                    format!(
                        "Cancel {} for {} at {}? The member will lose this slot.",
                        b.class_name, b.member, b.starts_at
                    )
                })
                .unwrap_or_default()
        })
    });

    let close = Callback::new(move |_| {
        overlay.close();
    });

    let confirm = Callback::new(move |_| {
        let Some(target) = overlay.close() else {
            return;
        };
        log::info!("booking {} cancelled", target.id);
        bookings.update(|list| list.retain(|b| b.id != target.id));
    });

    view! {
        <div class="bookings">
            <PageHeader
                title=title
                subtitle=Signal::derive(move || format!("{} upcoming", bookings.with(Vec::len)))
            />
            <Show
                when=move || bookings.with(|list| !list.is_empty())
                fallback=|| view! { <p class="empty-state">"No bookings left for today."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Time"</th>
                            <th>"Member"</th>
                            <th>"Class"</th>
                            <th>"Trainer"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || bookings.get()
                            key=|b| b.id
                            children=move |b: Booking| {
                                let row = b.clone();
                                view! {
                                    <tr>
                                        <td>{b.starts_at}</td>
                                        <td>{b.member}</td>
                                        <td>{b.class_name}</td>
                                        <td>{b.trainer}</td>
                                        <td class="table__actions">
                                            <Button
                                                variant="ghost"
                                                size="sm"
                                                on_click=Callback::new(move |_| {
                                                    overlay.open(row.clone());
                                                })
                                            >
                                                {icon("trash")}
                                                "Cancel"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <ConfirmModal
                is_open=is_open
                on_close=close
                on_confirm=confirm
                title="Cancel booking".to_string()
                message=message
                variant=ConfirmVariant::Danger
                confirm_text="Cancel booking".to_string()
                cancel_text="Keep".to_string()
            />
        </div>
    }
}
