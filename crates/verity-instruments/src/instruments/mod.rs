pub mod abas3;
pub mod adi_r;
pub mod ados2;
pub mod asrs;
pub mod migdas2;
pub mod sensory_profile2;
pub mod srs2;
pub mod vineland3;
pub mod wisc5;
