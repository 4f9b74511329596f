mod mock_native_wrapper_contract;
mod swap_test_context;
