use std::time::Duration;

/// Returned by [`Backoff::next`] once the retry budget is spent.
///
/// It is distinct from every delay, including a zero one.
pub const STOP: Option<Duration> = None;

/// Produces the delays of a retry sequence.
///
/// Implementations are plain mutable values: one instance drives one retry
/// sequence at a time.
pub trait Backoff {
    /// Delay to wait before the next attempt, or [`STOP`] when the caller must give up.
    fn next(&mut self) -> Option<Duration>;

    /// Starts a new retry sequence.
    fn reset(&mut self);

    /// Iterates over the remaining delays until [`STOP`].
    ///
    /// Does not reset; call [`Backoff::reset`] first when starting a sequence.
    fn delays(&mut self) -> Delays<'_, Self>
    where
        Self: Sized,
    {
        Delays { backoff: self }
    }
}

impl<B: Backoff + ?Sized> Backoff for &mut B {
    fn next(&mut self) -> Option<Duration> {
        (**self).next()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<B: Backoff + ?Sized> Backoff for Box<B> {
    fn next(&mut self) -> Option<Duration> {
        (**self).next()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Iterator returned by [`Backoff::delays`].
#[derive(Debug)]
pub struct Delays<'a, B> {
    backoff: &'a mut B,
}

impl<B: Backoff> Iterator for Delays<'_, B> {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        self.backoff.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed delay, stops after `left` calls.
    struct Countdown {
        left: u32,
        total: u32,
    }

    impl Backoff for Countdown {
        fn next(&mut self) -> Option<Duration> {
            if self.left == 0 {
                return STOP;
            }
            self.left -= 1;
            Some(Duration::from_millis(10))
        }

        fn reset(&mut self) {
            self.left = self.total;
        }
    }

    #[test]
    fn stop_is_not_a_delay() {
        assert_ne!(STOP, Some(Duration::ZERO));
        assert!(STOP.is_none());
    }

    #[test]
    fn delays_ends_at_stop() {
        let mut b = Countdown { left: 0, total: 4 };
        b.reset();

        let all: Vec<_> = b.delays().collect();
        assert_eq!(all.len(), 4);
        assert_eq!(b.next(), STOP);
    }

    #[test]
    fn works_through_trait_objects() {
        let mut boxed: Box<dyn Backoff> = Box::new(Countdown { left: 0, total: 2 });
        boxed.reset();

        assert!(boxed.next().is_some());
        assert!(boxed.next().is_some());
        assert_eq!(boxed.next(), STOP);
    }
}
