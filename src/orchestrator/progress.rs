//! 进度通知

use tracing::info;

/// 进度观察者，每完成一次提交调用一次
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, completed: usize, total: usize);
}

impl<F> ProgressObserver for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn on_progress(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// 通过 tracing 输出进度，每 `step` 次输出一行
#[derive(Debug, Clone, Copy)]
pub struct TracingProgress {
    step: usize,
}

impl TracingProgress {
    pub fn new(step: usize) -> Self {
        Self { step: step.max(1) }
    }

    /// 大约每 5% 输出一次
    pub fn for_total(total: usize) -> Self {
        Self::new(total / 20)
    }

    pub fn should_report(&self, completed: usize, total: usize) -> bool {
        completed == total || completed % self.step == 0
    }
}

impl ProgressObserver for TracingProgress {
    fn on_progress(&self, completed: usize, total: usize) {
        if self.should_report(completed, total) {
            let percent = if total == 0 {
                100
            } else {
                completed * 100 / total
            };
            info!("📈 进度: {}/{} ({}%)", completed, total, percent);
        }
    }
}
