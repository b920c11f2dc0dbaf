//! Partition executors
//!
//! A step hands the executor one job per row partition. The executor decides
//! where those jobs run; the step only relies on two guarantees:
//!
//! - job 0 runs on the calling thread (so the caller is never idle), and
//! - `execute` returns only after every job has finished (the step's single
//!   barrier before the buffer swap).
//!
//! A panic in any job propagates out of `execute`.

use serde::{Deserialize, Serialize};

use crate::core::utils::console;

pub const MIN_WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 255;

/// One partition's work. Borrows the boards for the duration of the step.
pub type PartitionJob<'a> = Box<dyn FnOnce() + Send + 'a>;

/// How a step distributes its rows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parallelism {
    /// Every row on the calling thread, no partitioning
    #[default]
    Sequential,
    /// Row partitions on a persistent Rayon pool
    ThreadPool,
    /// Row partitions on fresh scoped OS threads each step
    ScopedThreads,
}

impl Parallelism {
    pub fn label(&self) -> &'static str {
        match self {
            Parallelism::Sequential => "No threads",
            Parallelism::ThreadPool => "Thread pool",
            Parallelism::ScopedThreads => "Scoped threads",
        }
    }
}

pub trait RowExecutor: Send + Sync {
    /// Number of partitions this executor splits a step into
    fn workers(&self) -> usize;

    fn label(&self) -> &'static str;

    /// Run every job; job 0 on the calling thread. Returns once all are done.
    fn execute<'a>(&self, jobs: Vec<PartitionJob<'a>>);
}

/// Clamp a requested worker count into the supported range
pub fn clamp_workers(requested: usize) -> usize {
    requested.clamp(MIN_WORKERS, MAX_WORKERS)
}

/// Worker count matching the machine, within the supported range
pub fn default_workers() -> usize {
    let n = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    clamp_workers(n)
}

/// Runs every partition on the calling thread, in partition order.
/// Used for `Sequential` and as a deterministic stand-in in tests.
pub struct InlineExecutor {
    workers: usize,
}

impl InlineExecutor {
    pub fn new(workers: usize) -> Self {
        Self { workers: clamp_workers(workers) }
    }
}

impl RowExecutor for InlineExecutor {
    fn workers(&self) -> usize {
        self.workers
    }

    fn label(&self) -> &'static str {
        "Inline"
    }

    fn execute<'a>(&self, jobs: Vec<PartitionJob<'a>>) {
        for job in jobs {
            job();
        }
    }
}

/// Spawns `workers - 1` scoped threads per step; the caller runs job 0
pub struct ScopedThreadExecutor {
    workers: usize,
}

impl ScopedThreadExecutor {
    pub fn new(workers: usize) -> Self {
        Self { workers: clamp_workers(workers) }
    }
}

impl RowExecutor for ScopedThreadExecutor {
    fn workers(&self) -> usize {
        self.workers
    }

    fn label(&self) -> &'static str {
        Parallelism::ScopedThreads.label()
    }

    fn execute<'a>(&self, jobs: Vec<PartitionJob<'a>>) {
        let mut jobs = jobs.into_iter();
        let Some(first) = jobs.next() else { return };
        // The scope joins every spawned thread before returning
        std::thread::scope(|scope| {
            for job in jobs {
                scope.spawn(job);
            }
            first();
        });
    }
}

/// Row partitions on Rayon.
///
/// Natively this owns a pool sized to the worker count. On wasm32 threads can
/// only come from the global pool that `init_thread_pool` installs, so the
/// jobs go there instead.
#[cfg(feature = "parallel")]
pub struct PoolExecutor {
    workers: usize,
    #[cfg(not(target_arch = "wasm32"))]
    pool: rayon::ThreadPool,
}

#[cfg(feature = "parallel")]
impl PoolExecutor {
    pub fn new(workers: usize) -> Result<Self, String> {
        let workers = clamp_workers(workers);
        #[cfg(target_arch = "wasm32")]
        {
            Ok(Self { workers })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("life-worker-{i}"))
                .build()
                .map_err(|e| e.to_string())?;
            Ok(Self { workers, pool })
        }
    }
}

#[cfg(feature = "parallel")]
impl RowExecutor for PoolExecutor {
    fn workers(&self) -> usize {
        self.workers
    }

    fn label(&self) -> &'static str {
        Parallelism::ThreadPool.label()
    }

    fn execute<'a>(&self, jobs: Vec<PartitionJob<'a>>) {
        let mut jobs = jobs.into_iter();
        let Some(first) = jobs.next() else { return };
        // in_place_scope keeps the closure on this thread; spawns go to the pool
        let run = |scope: &rayon::Scope<'a>| {
            for job in jobs {
                scope.spawn(move |_| job());
            }
            first();
        };
        #[cfg(not(target_arch = "wasm32"))]
        self.pool.in_place_scope(run);
        #[cfg(target_arch = "wasm32")]
        rayon::in_place_scope(run);
    }
}

/// Whether this target can spawn OS threads on demand
pub fn can_spawn_threads() -> bool {
    !cfg!(target_arch = "wasm32")
}

/// Scoped threads where the target can spawn them, inline partitions otherwise
fn scoped_or_inline(workers: usize, threads_available: bool) -> Box<dyn RowExecutor> {
    if threads_available {
        Box::new(ScopedThreadExecutor::new(workers))
    } else {
        console::warn("threads cannot be spawned on this target, running partitions inline");
        Box::new(InlineExecutor::new(workers))
    }
}

/// Build the executor for a parallelism mode.
///
/// Falls back to scoped threads when the pool cannot be created or the
/// `parallel` feature is off, and to inline partitions where threads cannot
/// be spawned at all (wasm32).
pub fn build_executor(parallelism: Parallelism, workers: usize) -> Box<dyn RowExecutor> {
    match parallelism {
        Parallelism::Sequential => Box::new(InlineExecutor::new(1)),
        Parallelism::ScopedThreads => scoped_or_inline(workers, can_spawn_threads()),
        Parallelism::ThreadPool => {
            #[cfg(feature = "parallel")]
            {
                match PoolExecutor::new(workers) {
                    Ok(pool) => return Box::new(pool),
                    Err(e) => console::warn(&format!("thread pool unavailable ({e})")),
                }
            }
            #[cfg(not(feature = "parallel"))]
            console::warn("built without `parallel`, no thread pool available");
            scoped_or_inline(workers, can_spawn_threads())
        }
    }
}
