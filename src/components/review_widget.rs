/// Review widget: the form on one side, the accumulated reviews on the other.
/// Owns the board signal and the deferred half of every submission.
use leptos::*;
use leptos::logging::{log, warn};
use crate::board::ReviewBoard;
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::config::WidgetConfig;
use crate::services::Services;
use crate::store::migrate_legacy;
use crate::utils::leptos_owner::with_owner_safe;

#[component]
pub fn ReviewWidget(
    #[prop(optional)] config: Option<WidgetConfig>,
    #[prop(optional)] services: Option<Services>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let services = services.unwrap_or_else(|| Services::browser(&config));

    if let Some(legacy) = &services.legacy_store {
        if let Err(err) = migrate_legacy(legacy.as_ref(), services.store.as_ref()) {
            warn!("[WIDGET] Legacy reviews not migrated: {}", err);
        }
    }

    let board = create_rw_signal(ReviewBoard::mount(services.store.as_ref(), config.policy));
    let owner = Owner::current();
    let palette = config.palette;
    let delay = config.submit_delay;

    let on_submit = Callback::new(move |_: ()| {
        let Some(started) = board.try_update(|b| b.submit()) else {
            return;
        };
        let ticket = match started {
            Ok(ticket) => ticket,
            Err(rejection) => {
                log!("[WIDGET] Submission not started: {}", rejection);
                return;
            }
        };

        let task_services = services.clone();
        services.scheduler.schedule(
            delay,
            Box::new(move || {
                let posted = with_owner_safe(owner, "review submission", || {
                    board.try_update(|b| {
                        let mut rng = task_services.rng.borrow_mut();
                        b.complete_submission(
                            ticket,
                            task_services.store.as_ref(),
                            task_services.clock.as_ref(),
                            &mut *rng,
                            palette,
                        )
                        .id
                    })
                })
                .flatten();
                if posted.is_none() {
                    log!("[WIDGET] Widget removed before the review was posted; dropping it");
                }
            }),
        );
    });

    on_cleanup(|| log!("[WIDGET] Review widget unmounted"));

    let reviews = Signal::derive(move || board.with(|b| b.reviews().to_vec()));

    view! {
        <div class="review-widget w-full max-w-6xl bg-white/80 rounded-[2rem] shadow-2xl overflow-hidden flex flex-col md:flex-row">
            <div class="w-full md:w-[40%] bg-slate-50/50 p-8 md:p-12 flex flex-col justify-center">
                <div class="mb-8">
                    <h1 class="text-3xl font-extrabold text-slate-800 tracking-tight">{ "Your Feedback Matters" }</h1>
                    <p class="text-slate-500 mt-2 text-sm leading-relaxed">
                        { "We love hearing from our community. Share your experience and help others make better choices." }
                    </p>
                </div>
                <ReviewForm board=board rating_input=config.rating_input on_submit=on_submit />
            </div>
            <ReviewsList reviews=reviews variant=config.variant />
        </div>
    }
}
