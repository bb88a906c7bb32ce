pub mod codegen_pipeline;
