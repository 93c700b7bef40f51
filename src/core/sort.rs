/// In-place ascending exchange sort.
///
/// Every position `i` is compared against each later position `j` and the
/// pair is swapped when out of order, so after pass `i` the slot holds the
/// smallest remaining value.
pub fn exchange_sort<T: Ord>(values: &mut [T]) {
    let len = values.len();
    for i in 0..len {
        for j in (i + 1)..len {
            if values[i] > values[j] {
                values.swap(i, j);
            }
        }
    }
}
