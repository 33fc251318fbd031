#[cfg(test)]
mod tests {
    use crate::error::SchedulingError;
    use crate::hours::{LunchWindow, OperatingHours};
    use crate::logic::{compute_available_slots, generate_candidate_slots, CandidateSlot};
    use crate::occupancy::OccupiedInterval;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
    }

    /// A `now` on a different day, so past-time filtering never applies.
    fn far_away_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn default_hours() -> OperatingHours {
        OperatingHours::validated(time(9, 0), time(19, 0), None, 20).unwrap()
    }

    fn hours_with_lunch() -> OperatingHours {
        // 10-minute steps so the walk lands on both sides of the lunch bounds.
        OperatingHours::validated(
            time(9, 0),
            time(19, 0),
            Some(LunchWindow {
                start: time(12, 0),
                end: time(13, 0),
            }),
            10,
        )
        .unwrap()
    }

    fn slot_at(slots: &[CandidateSlot], h: u32, m: u32) -> &CandidateSlot {
        slots
            .iter()
            .find(|slot| slot.start == time(h, m))
            .unwrap_or_else(|| panic!("no slot at {h:02}:{m:02}"))
    }

    #[test]
    fn test_identical_inputs_produce_identical_output() {
        let hours = hours_with_lunch();
        let occupied = vec![OccupiedInterval::new(time(10, 0), 45).unwrap()];
        let first = compute_available_slots(day(), &hours, 30, &occupied, far_away_now()).unwrap();
        let second = compute_available_slots(day(), &hours, 30, &occupied, far_away_now()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_slots_are_strictly_ordered_without_duplicates() {
        let slots = generate_candidate_slots(&default_hours(), 30).unwrap();
        for pair in slots.windows(2) {
            assert!(
                pair[0].start < pair[1].start,
                "slots out of order: {:?} then {:?}",
                pair[0].start,
                pair[1].start
            );
        }
    }

    #[test]
    fn test_slot_count_follows_the_count_law() {
        // floor((closes - opens - duration) / granularity) + 1
        for (duration, granularity, expected) in [
            (30u32, 20u32, ((600 - 30) / 20) + 1),
            (60, 20, ((600 - 60) / 20) + 1),
            (20, 30, ((600 - 20) / 30) + 1),
            (600, 20, 1),
        ] {
            let hours =
                OperatingHours::validated(time(9, 0), time(19, 0), None, granularity).unwrap();
            let slots = generate_candidate_slots(&hours, duration).unwrap();
            assert_eq!(
                slots.len() as u32,
                expected,
                "duration {duration} granularity {granularity}"
            );
        }
    }

    #[test]
    fn test_slot_count_is_independent_of_occupancy() {
        let hours = default_hours();
        let fully_booked: Vec<_> = (0..10)
            .map(|i| OccupiedInterval::new(time(9 + i, 0), 60).unwrap())
            .collect();
        let free = compute_available_slots(day(), &hours, 30, &[], far_away_now()).unwrap();
        let busy =
            compute_available_slots(day(), &hours, 30, &fully_booked, far_away_now()).unwrap();
        assert_eq!(free.len(), busy.len());
        assert!(busy.iter().any(|slot| !slot.available));
    }

    #[test]
    fn test_slot_ending_exactly_at_closing_is_kept() {
        // 09:00 + 600 minutes lands exactly on 19:00; it is the only fit.
        let slots = generate_candidate_slots(&default_hours(), 600).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, time(9, 0));

        // One minute more and nothing fits at all.
        let slots = generate_candidate_slots(&default_hours(), 601).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn test_overrunning_slots_are_omitted_not_flagged() {
        // With a 60-minute service the last start that fits is 18:00; the
        // 18:20 and 18:40 walk positions must not appear at all.
        let slots = generate_candidate_slots(&default_hours(), 60).unwrap();
        let last = slots.last().unwrap();
        assert_eq!(last.start, time(18, 0));
        assert!(slots.iter().all(|slot| slot.start <= time(18, 0)));
    }

    #[test]
    fn test_lunch_boundaries_are_half_open() {
        let hours = hours_with_lunch();
        let slots = compute_available_slots(day(), &hours, 30, &[], far_away_now()).unwrap();

        // Ends exactly at lunch start: available.
        assert!(slot_at(&slots, 11, 30).available);
        // Runs 10 minutes into lunch: unavailable.
        assert!(!slot_at(&slots, 11, 40).available);
        // Inside lunch: unavailable.
        assert!(!slot_at(&slots, 12, 0).available);
        assert!(!slot_at(&slots, 12, 40).available);
        // Starts exactly at lunch end: available.
        assert!(slot_at(&slots, 13, 0).available);
    }

    #[test]
    fn test_occupied_overlap_covers_all_containment_relations() {
        let hours = default_hours();

        // Occupied interval fully inside the candidate slot: 09:40..11:10
        // contains 10:00..11:00.
        let inner = vec![OccupiedInterval::new(time(10, 0), 60).unwrap()];
        let slots = compute_available_slots(day(), &hours, 90, &inner, far_away_now()).unwrap();
        assert!(!slot_at(&slots, 9, 40).available, "slot containing the interval");

        // Candidate slot fully inside the occupied interval.
        let outer = vec![OccupiedInterval::new(time(9, 0), 180).unwrap()];
        let slots = compute_available_slots(day(), &hours, 30, &outer, far_away_now()).unwrap();
        assert!(!slot_at(&slots, 10, 0).available, "slot inside the interval");

        // Partial overlaps in both directions.
        let occupied = vec![OccupiedInterval::new(time(10, 0), 30).unwrap()];
        let slots = compute_available_slots(day(), &hours, 30, &occupied, far_away_now()).unwrap();
        assert!(!slot_at(&slots, 9, 40).available, "slot ends inside the interval");
        assert!(!slot_at(&slots, 10, 20).available, "slot starts inside the interval");
    }

    #[test]
    fn test_touching_occupied_boundaries_do_not_conflict() {
        let hours = default_hours();
        let occupied = vec![OccupiedInterval::new(time(10, 0), 40).unwrap()];
        let slots = compute_available_slots(day(), &hours, 20, &occupied, far_away_now()).unwrap();

        // Ends exactly where the interval starts, starts exactly where it ends.
        assert!(slot_at(&slots, 9, 40).available);
        assert!(slot_at(&slots, 10, 40).available);
        // And inside it is taken.
        assert!(!slot_at(&slots, 10, 0).available);
        assert!(!slot_at(&slots, 10, 20).available);
    }

    #[test]
    fn test_same_day_past_slots_are_removed_entirely() {
        let hours = default_hours();
        let now = day().and_hms_opt(14, 5, 0).unwrap();
        let slots = compute_available_slots(day(), &hours, 30, &[], now).unwrap();

        assert!(!slots.is_empty());
        for slot in &slots {
            assert!(
                day().and_time(slot.start) > now,
                "slot at {} should have been omitted",
                slot.start
            );
        }
        // The first surviving slot is the first walk position after 14:05.
        assert_eq!(slots[0].start, time(14, 20));
    }

    #[test]
    fn test_slot_starting_exactly_at_now_is_removed() {
        let hours = default_hours();
        let now = day().and_hms_opt(14, 20, 0).unwrap();
        let slots = compute_available_slots(day(), &hours, 30, &[], now).unwrap();
        assert_eq!(slots[0].start, time(14, 40));
    }

    #[test]
    fn test_future_day_ignores_now_entirely() {
        let hours = default_hours();
        let now = NaiveDate::from_ymd_opt(2026, 8, 9)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let slots = compute_available_slots(day(), &hours, 30, &[], now).unwrap();
        assert_eq!(slots[0].start, time(9, 0));
    }

    #[test]
    fn test_zero_service_duration_is_rejected() {
        assert!(matches!(
            compute_available_slots(day(), &default_hours(), 0, &[], far_away_now()),
            Err(SchedulingError::Validation(_))
        ));
    }

    #[test]
    fn test_malformed_occupied_interval_fails_fast() {
        // Bypass the constructor; the engine re-checks its inputs.
        let malformed = vec![OccupiedInterval {
            start: time(10, 0),
            duration_minutes: 0,
        }];
        assert!(matches!(
            compute_available_slots(day(), &default_hours(), 30, &malformed, far_away_now()),
            Err(SchedulingError::Validation(_))
        ));
    }

    #[test]
    fn test_contradictory_window_is_rejected() {
        let broken = OperatingHours {
            opens_at: time(19, 0),
            closes_at: time(9, 0),
            lunch: None,
            granularity_minutes: 20,
        };
        assert!(matches!(
            compute_available_slots(day(), &broken, 30, &[], far_away_now()),
            Err(SchedulingError::Configuration(_))
        ));
    }
}
