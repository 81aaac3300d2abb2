use crate::types::{EdgeSchedule, Minutes};

/// Time at which a traveller standing at the departure station at `cost_at_u`
/// arrives at the other end of the edge, including the wait for the next vehicle.
/// Arriving exactly at a departure (the first one included) means boarding it.
/// `None` when the arrival does not fit in `Minutes`.
pub fn effective_arrival(cost_at_u: Minutes, duration: Minutes, first_departure: Minutes, frequency: Minutes) -> Option<Minutes> {
    if cost_at_u <= first_departure {
        return first_departure.checked_add(duration);
    }

    // At least one vehicle has left already
    if frequency == 0 {
        return cost_at_u.checked_add(duration);
    }

    match cost_at_u.checked_sub(first_departure)? % frequency {
        0 => cost_at_u.checked_add(duration),
        phase => cost_at_u.checked_add(duration)?.checked_add(frequency - phase)
    }
}

/// Departure time of the first vehicle a traveller present at `time` can board.
pub fn next_departure(time: Minutes, first_departure: Minutes, frequency: Minutes) -> Option<Minutes> {
    let ready = time.max(first_departure);
    if frequency == 0 {
        return Some(ready);
    }

    ready.checked_add((frequency - ready.checked_sub(first_departure)? % frequency) % frequency)
}

impl EdgeSchedule {
    pub fn arrival_from(&self, time: Minutes) -> Option<Minutes> {
        let arrival = effective_arrival(time, self.duration, self.first_departure, self.frequency);
        debug_assert_eq!(
            arrival,
            next_departure(time, self.first_departure, self.frequency).and_then(|departure| departure.checked_add(self.duration))
        );
        arrival
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn waits_for_first_departure() {
        assert_eq!(effective_arrival(0, 4, 4, 4), Some(8));
        assert_eq!(effective_arrival(-20, 3, 10, 0), Some(13));
    }

    #[test]
    fn waits_for_next_periodic_departure() {
        // (6 - 4) % 4 = 2, so 2 minutes waiting
        assert_eq!(effective_arrival(6, 4, 4, 4), Some(12));
        // (5 - 0) % 15 = 5, so 10 minutes waiting
        assert_eq!(effective_arrival(5, 10, 0, 15), Some(25));
    }

    #[test]
    fn no_frequency_means_no_wait() {
        assert_eq!(effective_arrival(10, 5, 2, 0), Some(15));
    }

    #[test]
    fn catches_departure_on_the_minute() {
        assert_eq!(effective_arrival(8, 4, 4, 4), Some(12));
        assert_eq!(effective_arrival(12, 4, 4, 4), Some(16));
        assert_eq!(effective_arrival(34, 1, 4, 15), Some(35));
        // One minute later the vehicle is gone
        assert_eq!(effective_arrival(35, 1, 4, 15), Some(50));
    }

    #[test]
    fn first_departure_is_caught() {
        for &frequency in &[0, 1, 5, 60] {
            assert_eq!(effective_arrival(30, 7, 30, frequency), Some(37));
        }
    }

    #[test]
    fn edge_schedule_arrival() {
        let edge = EdgeSchedule { duration: 4, first_departure: 4, frequency: 4 };
        assert_eq!(edge.arrival_from(6), Some(12));
    }

    #[test]
    fn arrival_past_the_end_of_time() {
        assert_eq!(effective_arrival(0, 5, Minutes::MAX, 0), None);
        assert_eq!(effective_arrival(Minutes::MAX - 2, 5, 0, 0), None);
        assert_eq!(effective_arrival(Minutes::MAX - 3, 5, 0, 7), None);
        assert_eq!(effective_arrival(Minutes::MAX, 1, Minutes::MIN, 4), None);
        assert_eq!(next_departure(Minutes::MAX, Minutes::MIN, 4), None);

        let edge = EdgeSchedule { duration: 5, first_departure: Minutes::MAX, frequency: 0 };
        assert_eq!(edge.arrival_from(0), None);
    }

    proptest! {
        #[test]
        fn closed_form_matches(
            cost_at_u in -500i64..5000,
            duration in 0i64..200,
            first_departure in -200i64..2000,
            frequency in 0i64..120
        ) {
            prop_assert_eq!(
                effective_arrival(cost_at_u, duration, first_departure, frequency),
                next_departure(cost_at_u, first_departure, frequency).map(|departure| departure + duration)
            );
        }

        #[test]
        fn never_earlier_than_riding_straight_away(
            cost_at_u in -500i64..5000,
            duration in 0i64..200,
            first_departure in -200i64..2000,
            frequency in 0i64..120
        ) {
            let arrival = effective_arrival(cost_at_u, duration, first_departure, frequency).unwrap();
            prop_assert!(arrival >= cost_at_u + duration);
            if frequency > 0 {
                prop_assert!(arrival < cost_at_u.max(first_departure) + duration + frequency);
            }
        }

        #[test]
        fn on_the_minute_boards_immediately(
            periods in 1i64..50,
            duration in 1i64..200,
            first_departure in -200i64..2000,
            frequency in 1i64..120
        ) {
            let cost_at_u = first_departure + periods * frequency;
            prop_assert_eq!(effective_arrival(cost_at_u, duration, first_departure, frequency), Some(cost_at_u + duration));
        }
    }
}
