// External services reached over HTTP (server only)

pub mod supabase;
pub mod therapy;
