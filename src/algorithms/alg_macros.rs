#[macro_export]
macro_rules! alg_test {
    ($x:ident) => {
    }
}
