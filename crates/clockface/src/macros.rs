#[macro_export]
macro_rules! impl_scalar_newtype {
    ($name:ty) => {
        impl $name {
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            pub fn get(self) -> f64 {
                self.0
            }
        }
    };
}
