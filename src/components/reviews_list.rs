/// Review list with the aggregate rating header.
/// Renders purely from the reviews it is given.
use leptos::*;
use crate::board::{average_rating, format_average};
use crate::config::Variant;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(
    #[prop(into)] reviews: Signal<Vec<Review>>,
    #[prop(optional)] variant: Variant,
) -> impl IntoView {
    let average = move || reviews.with(|r| format_average(average_rating(r)));
    let count = move || reviews.with(Vec::len);
    let has_reviews = move || count() > 0;

    view! {
        <div class="w-full md:w-[60%] bg-white flex flex-col relative">
            <div class="px-8 py-6 border-b border-slate-100 flex justify-between items-center">
                <div>
                    <h2 class="text-xl font-bold text-slate-800">{ "Recent Reviews" }</h2>
                    <p class="text-slate-400 text-xs mt-0.5">{ "Community Feedback" }</p>
                </div>
                <div class="flex items-center gap-2">
                    <span class="review-average text-3xl font-black text-slate-800">{average}</span>
                    <div class="flex flex-col">
                        <div class="flex text-yellow-400 text-xs">{ "★★★★★" }</div>
                        <span class="review-count text-[10px] text-slate-400 font-bold uppercase">
                            {move || format!("{} Reviews", count())}
                        </span>
                    </div>
                </div>
            </div>

            <div class="flex-1 overflow-y-auto p-8 bg-slate-50/30">
                <Show
                    when=has_reviews
                    fallback=|| view! {
                        <div class="review-empty h-full flex flex-col items-center justify-center text-center opacity-40">
                            <p class="text-slate-500 font-medium">{ "No reviews yet." }</p>
                            <p class="text-sm text-slate-400">{ "Be the first to share your thoughts!" }</p>
                        </div>
                    }
                >
                    <ul class="space-y-5">
                        <For
                            each=move || reviews.get()
                            key=|review| review.id
                            children=move |review| view! { <ReviewCard review=review variant=variant /> }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn ReviewCard(review: Review, #[prop(optional)] variant: Variant) -> impl IntoView {
    let avatar_class = format!(
        "review-avatar w-12 h-12 rounded-full {} flex items-center justify-center text-white font-bold text-lg shrink-0",
        variant.avatar_class(&review.color)
    );
    let initial = review.initial();
    let review_id = review.id.to_string();
    let stars = review
        .star_cells()
        .into_iter()
        .map(|filled| {
            let class = if filled { "star text-yellow-400" } else { "star text-slate-200" };
            view! { <span class=class>{ "★" }</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <li class="review-card bg-white p-6 rounded-2xl shadow-sm border border-slate-100" data-review-id=review_id>
            <div class="flex gap-4">
                <div class=avatar_class>{initial}</div>
                <div class="flex-1">
                    <div class="flex justify-between items-start">
                        <div>
                            <h3 class="review-author font-bold text-slate-800">{review.username}</h3>
                            <p class="review-date text-xs text-slate-400 mt-0.5">{review.timestamp}</p>
                        </div>
                        <div class="review-stars bg-indigo-50 px-2.5 py-1 rounded-lg flex gap-1 text-xs">
                            {stars}
                        </div>
                    </div>
                    <p class="review-comment mt-3 text-slate-600 text-sm leading-relaxed">{review.comment}</p>
                </div>
            </div>
        </li>
    }
}
