// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer wires the other layers together to accomplish
// one goal: turn the source CSV into a scored model.
//
// Rules for this layer:
//   - No numeric model code here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layers 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Ingestion → transformation → training
pub mod pipeline_use_case;
