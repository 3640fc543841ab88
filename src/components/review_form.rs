use leptos::*;
use leptos::ev::SubmitEvent;
use crate::board::ReviewBoard;
use crate::config::RatingInput;
use crate::form::{Field, ValidationPolicy};
use crate::models::review::{Rating, MAX_STARS};

const INPUT_CLASS: &str = "w-full px-5 py-3.5 bg-white border-0 ring-1 ring-slate-200 rounded-xl text-slate-700 focus:ring-2 focus:ring-indigo-500";
const LABEL_CLASS: &str = "text-xs font-bold text-slate-400 uppercase tracking-wider ml-1";

#[component]
pub fn ReviewForm(
    board: RwSignal<ReviewBoard>,
    rating_input: RatingInput,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submitting = move || board.with(ReviewBoard::is_submitting);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    let rating_control = match rating_input {
        RatingInput::Select => view! { <RatingSelect board=board /> }.into_view(),
        RatingInput::Stars => view! { <StarPicker board=board /> }.into_view(),
    };

    view! {
        <form class="review-form space-y-5" on:submit=handle_submit>
            <div class="space-y-1.5">
                <label class=LABEL_CLASS>{ "Full Name" }</label>
                <input
                    type="text"
                    name="username"
                    placeholder="e.g. Alex Johnson"
                    class=INPUT_CLASS
                    prop:value=move || board.with(|b| b.form().name.clone())
                    on:input=move |e| board.update(|b| b.update_field(Field::Name, event_target_value(&e)))
                />
            </div>
            <div class="space-y-1.5">
                <label class=LABEL_CLASS>{ "Rating" }</label>
                {rating_control}
            </div>
            <div class="space-y-1.5">
                <label class=LABEL_CLASS>{ "Review" }</label>
                <textarea
                    name="comment"
                    rows="4"
                    placeholder="Tell us about your experience..."
                    class=INPUT_CLASS
                    prop:value=move || board.with(|b| b.form().comment.clone())
                    on:input=move |e| board.update(|b| b.update_field(Field::Comment, event_target_value(&e)))
                />
            </div>
            {move || board.with(|b| b.notice().map(|notice| notice.message())).map(|message| view! {
                <p class="review-notice text-sm text-rose-500" role="alert">{message}</p>
            })}
            <button
                type="submit"
                disabled=submitting
                class=move || if submitting() {
                    "w-full py-4 rounded-xl text-white font-bold text-lg bg-indigo-400 cursor-wait"
                } else {
                    "w-full py-4 rounded-xl text-white font-bold text-lg bg-gradient-to-r from-indigo-600 to-violet-600"
                }
            >
                {move || if submitting() { "Posting..." } else { "Post Review" }}
            </button>
        </form>
    }
}

/// Dropdown rating, highest first.
#[component]
pub fn RatingSelect(board: RwSignal<ReviewBoard>) -> impl IntoView {
    // Strict forms start unset, so they need an option that matches 0.
    let placeholder = (board.with_untracked(ReviewBoard::policy) == ValidationPolicy::Strict)
        .then(|| view! { <option value="0" disabled=true>{ "Choose a rating" }</option> });

    view! {
        <select
            name="rating"
            class=INPUT_CLASS
            prop:value=move || board.with(|b| b.form().rating.to_string())
            on:change=move |e| board.update(|b| b.update_field(Field::Rating, event_target_value(&e)))
        >
            {placeholder}
            {Rating::all_descending().map(|rating| view! {
                <option value=rating.get().to_string()>{ "⭐".repeat(rating.get() as usize) }</option>
            }).collect::<Vec<_>>()}
        </select>
    }
}

/// One button per star; clicking the third lights the first three.
#[component]
pub fn StarPicker(board: RwSignal<ReviewBoard>) -> impl IntoView {
    view! {
        <div class="star-picker flex gap-1" role="radiogroup">
            {(1..=MAX_STARS).map(|value| {
                let label = if value == 1 { "1 star".to_string() } else { format!("{} stars", value) };
                view! {
                    <button
                        type="button"
                        aria-label=label
                        class=move || if board.with(|b| b.form().rating >= value) {
                            "star-button text-2xl text-yellow-400"
                        } else {
                            "star-button text-2xl text-slate-300"
                        }
                        on:click=move |_| board.update(|b| b.select_rating(value))
                    >
                        { "★" }
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
