use std::fmt;

/// Whole seconds since the session started running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElapsedTime {
    seconds: u64,
}

impl ElapsedTime {
    pub fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn tick(&mut self) {
        self.seconds += 1;
    }

    pub fn hours(&self) -> u64 {
        self.seconds / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.seconds % 3600) / 60
    }

    pub fn secs(&self) -> u64 {
        self.seconds % 60
    }
}

// Hours keep growing past two digits instead of wrapping.
impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours(), self.minutes(), self.secs())
    }
}
