use crate::domain::cell::Cell;

/// Partition `index` of `stride`: owns rows `index, index + stride, ...`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Partition {
    index: usize,
    stride: usize,
}

impl Partition {
    pub(crate) fn new(index: usize, stride: usize) -> Self {
        assert!(stride > 0, "partition stride must be positive");
        assert!(
            index < stride,
            "partition index {} outside 0..{}",
            index,
            stride
        );
        Self { index, stride }
    }

    #[inline]
    pub(crate) fn owns(&self, row: usize) -> bool {
        row % self.stride == self.index
    }

    /// Rows owned by this partition on a board with `rows` rows
    pub(crate) fn rows(&self, rows: usize) -> std::iter::StepBy<std::ops::Range<usize>> {
        (self.index..rows).step_by(self.stride)
    }
}

/// The rows of one output board assigned to a single worker
pub(crate) struct RowSet<'a> {
    pub(crate) partition: Partition,
    pub(crate) rows: Vec<(u32, &'a mut [Cell])>,
}

/// Split the output board's rows by fixed stride.
///
/// Row `r` goes to partition `r % workers`. Each `&mut [Cell]` row exists in
/// exactly one `RowSet`, so workers can write concurrently without locks.
pub(crate) fn stride_partitions<'a>(
    rows: std::slice::ChunksExactMut<'a, Cell>,
    row_count: usize,
    workers: usize,
) -> Vec<RowSet<'a>> {
    let mut sets: Vec<RowSet<'a>> = (0..workers)
        .map(|k| {
            let partition = Partition::new(k, workers);
            RowSet {
                partition,
                rows: Vec::with_capacity(partition.rows(row_count).len()),
            }
        })
        .collect();

    for (row, slice) in rows.enumerate() {
        let set = &mut sets[row % workers];
        debug_assert!(set.partition.owns(row));
        set.rows.push((row as u32, slice));
    }
    sets
}
