//! Review widget state: the loaded list, the form, and the single in-flight
//! submission. Views hold a `ReviewBoard` in a signal and call into it; all
//! the rules live here so they can be exercised without a DOM.

use crate::clock::{next_id, Clock};
use crate::error::{SubmitRejection, ValidationError};
use crate::form::{Field, FormState, ValidDraft, ValidationPolicy};
use crate::models::review::Review;
use crate::palette::pick_color;
use crate::store::{load_or_empty, ReviewStore};
use leptos::logging::{log, warn};
use rand::RngCore;

/// Something the user should see next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Invalid(ValidationError),
    SaveFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Invalid(err) => err.to_string(),
            Notice::SaveFailed(reason) => format!(
                "Your review was posted, but it could not be saved on this device ({}).",
                reason
            ),
        }
    }
}

/// Proof that `submit` accepted the form. Consumed by `complete_submission`.
#[derive(Debug)]
pub struct SubmissionTicket {
    draft: ValidDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
    form: FormState,
    policy: ValidationPolicy,
    pending: bool,
    last_id: Option<i64>,
    notice: Option<Notice>,
}

impl ReviewBoard {
    pub fn new(reviews: Vec<Review>, policy: ValidationPolicy) -> Self {
        let last_id = reviews.iter().map(|r| r.id).max();
        Self {
            reviews,
            form: FormState::reset(policy),
            policy,
            pending: false,
            last_id,
            notice: None,
        }
    }

    /// Board for a freshly mounted widget. Never fails: unreadable storage
    /// starts an empty list.
    pub fn mount(store: &dyn ReviewStore, policy: ValidationPolicy) -> Self {
        Self::new(load_or_empty(store), policy)
    }

    /// Newest first.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn is_submitting(&self) -> bool {
        self.pending
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        self.form.update_field(field, value);
        self.clear_validation_notice();
    }

    pub fn select_rating(&mut self, value: u8) {
        self.form.select_rating(value);
        self.clear_validation_notice();
    }

    fn clear_validation_notice(&mut self) {
        if matches!(self.notice, Some(Notice::Invalid(_))) {
            self.notice = None;
        }
    }

    /// Starts a submission. While one is in flight, or when the form is
    /// incomplete, nothing changes apart from the notice.
    pub fn submit(&mut self) -> Result<SubmissionTicket, SubmitRejection> {
        if self.pending {
            return Err(SubmitRejection::AlreadyPending);
        }
        let draft = self.form.validate(self.policy).map_err(|err| {
            log!("[BOARD] Rejected submission: {}", err);
            self.notice = Some(Notice::Invalid(err));
            SubmitRejection::from(err)
        })?;
        self.pending = true;
        self.notice = None;
        Ok(SubmissionTicket { draft })
    }

    /// Finishes a submission: builds the record, puts it at the front of
    /// the list, resets the form and writes the whole list to `store`.
    /// A failed write keeps the review in memory and raises a notice.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        store: &dyn ReviewStore,
        clock: &dyn Clock,
        rng: &mut dyn RngCore,
        palette: &[&str],
    ) -> &Review {
        let SubmissionTicket { draft } = ticket;
        let id = next_id(clock.now_millis(), self.last_id);
        self.last_id = Some(id);

        let review = Review {
            id,
            username: draft.name,
            rating: draft.rating,
            comment: draft.comment,
            timestamp: clock.display_date(),
            color: pick_color(palette, rng),
        };
        self.reviews.insert(0, review);
        self.form = FormState::reset(self.policy);
        self.pending = false;

        match store.save(&self.reviews) {
            Ok(()) => log!("[BOARD] Posted review {} ({} total)", id, self.reviews.len()),
            Err(err) => {
                warn!("[BOARD] Review {} kept in memory only: {}", id, err);
                self.notice = Some(Notice::SaveFailed(err.to_string()));
            }
        }
        &self.reviews[0]
    }

    pub fn average_rating(&self) -> Option<f64> {
        average_rating(&self.reviews)
    }

    pub fn average_label(&self) -> String {
        format_average(self.average_rating())
    }
}

/// Mean rating, or `None` for an empty list.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating.get())).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}

/// One decimal place, rounded from the exact stored value with exact halves
/// rounded up (browser `toFixed(1)`); "0.0" when there is nothing to average.
pub fn format_average(average: Option<f64>) -> String {
    let avg = average.unwrap_or(0.0);
    // Odd multiples of 0.25 are the only values sitting exactly on a half.
    let quarters = avg * 4.0;
    if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        return format!("{:.1}", (avg * 10.0).ceil() / 10.0);
    }
    format!("{:.1}", avg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::review::Rating;
    use crate::palette::GRADIENT_PALETTE;
    use crate::store::{MemoryStore, SchemaVersion};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const NOW: i64 = 1_792_324_800_000;

    struct Harness {
        board: ReviewBoard,
        store: MemoryStore,
        clock: FixedClock,
        rng: Pcg32,
    }

    impl Harness {
        fn new(policy: ValidationPolicy) -> Self {
            let store = MemoryStore::new(SchemaVersion::V2);
            Self {
                board: ReviewBoard::mount(&store, policy),
                store,
                clock: FixedClock::new(NOW),
                rng: Pcg32::seed_from_u64(11),
            }
        }

        fn fill(&mut self, name: &str, rating: u8, comment: &str) {
            self.board.update_field(Field::Name, name.into());
            self.board.select_rating(rating);
            self.board.update_field(Field::Comment, comment.into());
        }

        fn finish(&mut self, ticket: SubmissionTicket) -> Review {
            self.board
                .complete_submission(ticket, &self.store, &self.clock, &mut self.rng, GRADIENT_PALETTE)
                .clone()
        }

        fn post(&mut self, name: &str, rating: u8, comment: &str) -> Review {
            self.fill(name, rating, comment);
            let ticket = self.board.submit().expect("form should be valid");
            let review = self.finish(ticket);
            self.clock.advance(1_000);
            review
        }
    }

    fn stored_review(id: i64, rating: u8) -> Review {
        Review {
            id,
            username: "Stored".into(),
            rating: Rating::new(rating).unwrap(),
            comment: "from before".into(),
            timestamp: "June 1, 2026".into(),
            color: "bg-sky-500".into(),
        }
    }

    #[test]
    fn alex_then_bo() {
        let mut h = Harness::new(ValidationPolicy::Strict);

        let alex = h.post("Alex", 5, "Great!");
        assert_eq!(h.board.len(), 1);
        assert_eq!(alex.username, "Alex");
        assert_eq!(alex.rating.get(), 5);
        assert_eq!(alex.comment, "Great!");
        assert!(!alex.timestamp.is_empty());
        assert_eq!(h.board.average_label(), "5.0");

        h.post("Bo", 3, "Ok");
        assert_eq!(h.board.len(), 2);
        assert_eq!(h.board.reviews()[0].username, "Bo");
        assert_eq!(h.board.reviews()[1].username, "Alex");
        assert_eq!(h.board.average_label(), "4.0");
    }

    #[test]
    fn n_submissions_newest_first() {
        let mut h = Harness::new(ValidationPolicy::Lenient);
        let names: Vec<String> = (0..12).map(|i| format!("user{}", i)).collect();
        for (i, name) in names.iter().enumerate() {
            h.post(name, (i % 5) as u8 + 1, "text");
        }
        assert_eq!(h.board.len(), names.len());
        let listed: Vec<&str> = h.board.reviews().iter().map(|r| r.username.as_str()).collect();
        let expected: Vec<&str> = names.iter().rev().map(String::as_str).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn every_submission_is_persisted() {
        let mut h = Harness::new(ValidationPolicy::Lenient);
        h.post("Alex", 5, "Great!");
        h.post("Bo", 3, "Ok");
        assert_eq!(h.store.load().unwrap().as_deref(), Some(h.board.reviews()));

        let reloaded = ReviewBoard::mount(&h.store, ValidationPolicy::Lenient);
        assert_eq!(reloaded.reviews(), h.board.reviews());
    }

    #[test]
    fn completed_review_gets_date_and_palette_color() {
        let mut h = Harness::new(ValidationPolicy::Lenient);
        let review = h.post("Alex", 4, "Nice");
        assert_eq!(review.id, NOW);
        assert_eq!(review.timestamp, "October 18, 2026");
        assert!(GRADIENT_PALETTE.contains(&review.color.as_str()));
    }

    #[test]
    fn ids_stay_unique_within_the_same_millisecond() {
        let mut h = Harness::new(ValidationPolicy::Lenient);
        for _ in 0..3 {
            h.fill("Same", 5, "Instant");
            let ticket = h.board.submit().unwrap();
            h.finish(ticket);
        }
        let ids: Vec<i64> = h.board.reviews().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![NOW + 2, NOW + 1, NOW]);
    }

    #[test]
    fn ids_continue_after_loaded_reviews() {
        let store = MemoryStore::new(SchemaVersion::V2);
        store.save(&[stored_review(NOW + 50, 4)]).unwrap();
        let mut board = ReviewBoard::mount(&store, ValidationPolicy::Lenient);
        board.update_field(Field::Name, "Late".into());
        board.update_field(Field::Comment, "Clock behind".into());
        let ticket = board.submit().unwrap();
        let review = board.complete_submission(
            ticket,
            &store,
            &FixedClock::new(NOW),
            &mut Pcg32::seed_from_u64(0),
            GRADIENT_PALETTE,
        );
        assert_eq!(review.id, NOW + 51);
    }

    #[test]
    fn invalid_forms_change_nothing_but_the_notice() {
        let mut h = Harness::new(ValidationPolicy::Strict);
        h.post("Alex", 5, "Great!");
        let before = h.board.reviews().to_vec();

        let cases = [
            ("", 4, "text", ValidationError::MissingName),
            ("Bo", 4, "   ", ValidationError::MissingComment),
            ("Bo", 0, "text", ValidationError::MissingRating),
        ];
        for (name, rating, comment, expected) in cases {
            h.fill(name, rating, comment);
            let form_before = h.board.form().clone();
            assert_eq!(h.board.submit().unwrap_err(), SubmitRejection::Invalid(expected));
            assert_eq!(h.board.reviews(), before.as_slice());
            assert_eq!(h.board.form(), &form_before);
            assert!(!h.board.is_submitting());
            assert_eq!(h.board.notice(), Some(&Notice::Invalid(expected)));
        }
        assert_eq!(h.store.load().unwrap(), Some(before));
    }

    #[test]
    fn editing_clears_a_validation_notice() {
        let mut h = Harness::new(ValidationPolicy::Lenient);
        assert!(h.board.submit().is_err());
        assert!(h.board.notice().is_some());
        h.board.update_field(Field::Name, "A".into());
        assert!(h.board.notice().is_none());
    }

    #[test]
    fn lenient_policy_defaults_to_five_stars() {
        let mut h = Harness::new(ValidationPolicy::Lenient);
        h.board.update_field(Field::Name, "Dee".into());
        h.board.update_field(Field::Comment, "Good".into());
        let ticket = h.board.submit().unwrap();
        assert_eq!(h.finish(ticket).rating.get(), 5);
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut h = Harness::new(ValidationPolicy::Lenient);
        h.fill("Alex", 5, "Great!");
        let ticket = h.board.submit().unwrap();
        assert!(h.board.is_submitting());

        assert_eq!(h.board.submit().unwrap_err(), SubmitRejection::AlreadyPending);
        assert_eq!(h.board.form().name, "Alex");

        h.finish(ticket);
        assert_eq!(h.board.len(), 1);
        assert!(!h.board.is_submitting());
        assert_eq!(h.board.form(), &FormState::reset(ValidationPolicy::Lenient));
    }

    #[test]
    fn completion_uses_the_values_from_submit_time() {
        let mut h = Harness::new(ValidationPolicy::Lenient);
        h.fill("Alex", 2, "First");
        let ticket = h.board.submit().unwrap();
        h.board.update_field(Field::Name, "Changed".into());
        let review = h.finish(ticket);
        assert_eq!(review.username, "Alex");
        assert_eq!(review.rating.get(), 2);
    }

    #[test]
    fn failed_write_keeps_review_in_memory() {
        let mut h = Harness::new(ValidationPolicy::Lenient);
        h.post("Alex", 5, "Great!");
        h.store.set_fail_writes(true);
        h.post("Bo", 3, "Ok");

        assert_eq!(h.board.len(), 2);
        assert!(matches!(h.board.notice(), Some(Notice::SaveFailed(_))));
        assert_eq!(h.store.load().unwrap().map(|r| r.len()), Some(1));
    }

    #[test]
    fn corrupt_storage_mounts_empty_and_is_overwritten() {
        let store = MemoryStore::new(SchemaVersion::V2);
        store.put_raw("[{\"id\":");
        let mut board = ReviewBoard::mount(&store, ValidationPolicy::Lenient);
        assert!(board.is_empty());

        board.update_field(Field::Name, "Eve".into());
        board.update_field(Field::Comment, "Fresh start".into());
        let ticket = board.submit().unwrap();
        board.complete_submission(
            ticket,
            &store,
            &FixedClock::new(NOW),
            &mut Pcg32::seed_from_u64(5),
            GRADIENT_PALETTE,
        );
        assert_eq!(store.load().unwrap().map(|r| r.len()), Some(1));
    }

    #[test]
    fn notices_read_as_sentences() {
        assert_eq!(Notice::Invalid(ValidationError::MissingName).message(), "Please enter your name.");
        assert!(Notice::SaveFailed("quota exceeded".into())
            .message()
            .contains("quota exceeded"));
    }

    #[test]
    fn average_formatting() {
        assert_eq!(format_average(None), "0.0");
        assert_eq!(format_average(Some(5.0)), "5.0");
        assert_eq!(format_average(Some(11.0 / 3.0)), "3.7");
        assert_eq!(format_average(Some(4.25)), "4.3");
        assert_eq!(format_average(Some(4.75)), "4.8");
        assert_eq!(format_average(Some(4.5)), "4.5");
        assert_eq!(format_average(Some(23.0 / 20.0)), "1.1");
        assert_eq!(format_average(Some(81.0 / 20.0)), "4.0");

        let reviews = vec![stored_review(1, 5), stored_review(2, 4), stored_review(3, 4), stored_review(4, 4)];
        assert_eq!(average_rating(&reviews), Some(4.25));
        assert_eq!(ReviewBoard::new(reviews, ValidationPolicy::Lenient).average_label(), "4.3");
        assert_eq!(average_rating(&[]), None);
    }
}
