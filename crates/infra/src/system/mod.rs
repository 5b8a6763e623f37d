use chrono::{Local, NaiveDateTime};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// System frozen at a given local time
pub struct StaticTimeSys {
    pub now: NaiveDateTime,
}
impl ISys for StaticTimeSys {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
