#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// A transform stage started on `atom_count` input atoms.
    StageStart {
        name: &'static str,
        atom_count: usize,
    },
    /// The stage finished and produced `atom_count` atoms.
    StageFinish {
        name: &'static str,
        atom_count: usize,
    },
    /// A non-fatal finding, already rendered for display.
    Warning(String),
}

/// Anything a stage produces that holds atoms.
pub(crate) trait StageOutput {
    fn atom_count(&self) -> usize;
}

impl<T> StageOutput for Vec<T> {
    fn atom_count(&self) -> usize {
        self.len()
    }
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `stage`, bracketing it with start and finish events.
    pub(crate) fn stage<T: StageOutput, E>(
        &self,
        name: &'static str,
        input_count: usize,
        stage: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        self.report(Progress::StageStart {
            name,
            atom_count: input_count,
        });
        let output = stage()?;
        self.report(Progress::StageFinish {
            name,
            atom_count: output.atom_count(),
        });
        Ok(output)
    }
}
