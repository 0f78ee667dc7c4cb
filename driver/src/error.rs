use kernel::KernelError;

/// Maps driver-side failures onto the kernel error taxonomy, keeping the
/// original error in the report stack.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
