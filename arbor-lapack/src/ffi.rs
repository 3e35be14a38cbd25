//! Raw FORTRAN declarations for the LAPACK and BLAS routines the safe layer
//! dispatches to.
//!
//! Every argument is passed by pointer, FORTRAN-style; matrices are
//! column-major. The four scalar kinds map to the usual s/d/c/z routine
//! quadruples. `num_complex::Complex` is `repr(C)` and layout-compatible
//! with FORTRAN COMPLEX / COMPLEX*16.

#![allow(clippy::missing_safety_doc)]
#![allow(non_camel_case_types)]

use num_complex::{Complex32, Complex64};

pub type c32 = Complex32;
pub type c64 = Complex64;

extern "C" {
    // ==================== LU: general (getrf / getrs) ====================
    pub fn sgetrf_(m: *const i32, n: *const i32, a: *mut f32, lda: *const i32, ipiv: *mut i32, info: *mut i32);
    pub fn dgetrf_(m: *const i32, n: *const i32, a: *mut f64, lda: *const i32, ipiv: *mut i32, info: *mut i32);
    pub fn cgetrf_(m: *const i32, n: *const i32, a: *mut c32, lda: *const i32, ipiv: *mut i32, info: *mut i32);
    pub fn zgetrf_(m: *const i32, n: *const i32, a: *mut c64, lda: *const i32, ipiv: *mut i32, info: *mut i32);

    pub fn sgetrs_(trans: *const u8, n: *const i32, nrhs: *const i32, a: *const f32, lda: *const i32, ipiv: *const i32, b: *mut f32, ldb: *const i32, info: *mut i32);
    pub fn dgetrs_(trans: *const u8, n: *const i32, nrhs: *const i32, a: *const f64, lda: *const i32, ipiv: *const i32, b: *mut f64, ldb: *const i32, info: *mut i32);
    pub fn cgetrs_(trans: *const u8, n: *const i32, nrhs: *const i32, a: *const c32, lda: *const i32, ipiv: *const i32, b: *mut c32, ldb: *const i32, info: *mut i32);
    pub fn zgetrs_(trans: *const u8, n: *const i32, nrhs: *const i32, a: *const c64, lda: *const i32, ipiv: *const i32, b: *mut c64, ldb: *const i32, info: *mut i32);

    // ==================== LU: tridiagonal / banded ====================
    pub fn sgttrf_(n: *const i32, dl: *mut f32, d: *mut f32, du: *mut f32, du2: *mut f32, ipiv: *mut i32, info: *mut i32);
    pub fn dgttrf_(n: *const i32, dl: *mut f64, d: *mut f64, du: *mut f64, du2: *mut f64, ipiv: *mut i32, info: *mut i32);
    pub fn cgttrf_(n: *const i32, dl: *mut c32, d: *mut c32, du: *mut c32, du2: *mut c32, ipiv: *mut i32, info: *mut i32);
    pub fn zgttrf_(n: *const i32, dl: *mut c64, d: *mut c64, du: *mut c64, du2: *mut c64, ipiv: *mut i32, info: *mut i32);

    pub fn sgbtrf_(m: *const i32, n: *const i32, kl: *const i32, ku: *const i32, ab: *mut f32, ldab: *const i32, ipiv: *mut i32, info: *mut i32);
    pub fn dgbtrf_(m: *const i32, n: *const i32, kl: *const i32, ku: *const i32, ab: *mut f64, ldab: *const i32, ipiv: *mut i32, info: *mut i32);
    pub fn cgbtrf_(m: *const i32, n: *const i32, kl: *const i32, ku: *const i32, ab: *mut c32, ldab: *const i32, ipiv: *mut i32, info: *mut i32);
    pub fn zgbtrf_(m: *const i32, n: *const i32, kl: *const i32, ku: *const i32, ab: *mut c64, ldab: *const i32, ipiv: *mut i32, info: *mut i32);

    // ==================== Cholesky / symmetric indefinite ====================
    pub fn spotrf_(uplo: *const u8, n: *const i32, a: *mut f32, lda: *const i32, info: *mut i32);
    pub fn dpotrf_(uplo: *const u8, n: *const i32, a: *mut f64, lda: *const i32, info: *mut i32);
    pub fn cpotrf_(uplo: *const u8, n: *const i32, a: *mut c32, lda: *const i32, info: *mut i32);
    pub fn zpotrf_(uplo: *const u8, n: *const i32, a: *mut c64, lda: *const i32, info: *mut i32);

    pub fn ssytrf_(uplo: *const u8, n: *const i32, a: *mut f32, lda: *const i32, ipiv: *mut i32, work: *mut f32, lwork: *const i32, info: *mut i32);
    pub fn dsytrf_(uplo: *const u8, n: *const i32, a: *mut f64, lda: *const i32, ipiv: *mut i32, work: *mut f64, lwork: *const i32, info: *mut i32);
    pub fn csytrf_(uplo: *const u8, n: *const i32, a: *mut c32, lda: *const i32, ipiv: *mut i32, work: *mut c32, lwork: *const i32, info: *mut i32);
    pub fn zsytrf_(uplo: *const u8, n: *const i32, a: *mut c64, lda: *const i32, ipiv: *mut i32, work: *mut c64, lwork: *const i32, info: *mut i32);

    // ==================== Symmetric / Hermitian eigen ====================
    pub fn ssyev_(jobz: *const u8, uplo: *const u8, n: *const i32, a: *mut f32, lda: *const i32, w: *mut f32, work: *mut f32, lwork: *const i32, info: *mut i32);
    pub fn dsyev_(jobz: *const u8, uplo: *const u8, n: *const i32, a: *mut f64, lda: *const i32, w: *mut f64, work: *mut f64, lwork: *const i32, info: *mut i32);
    pub fn cheev_(jobz: *const u8, uplo: *const u8, n: *const i32, a: *mut c32, lda: *const i32, w: *mut f32, work: *mut c32, lwork: *const i32, rwork: *mut f32, info: *mut i32);
    pub fn zheev_(jobz: *const u8, uplo: *const u8, n: *const i32, a: *mut c64, lda: *const i32, w: *mut f64, work: *mut c64, lwork: *const i32, rwork: *mut f64, info: *mut i32);

    pub fn ssyevx_(jobz: *const u8, range: *const u8, uplo: *const u8, n: *const i32, a: *mut f32, lda: *const i32, vl: *const f32, vu: *const f32, il: *const i32, iu: *const i32, abstol: *const f32, m: *mut i32, w: *mut f32, z: *mut f32, ldz: *const i32, work: *mut f32, lwork: *const i32, iwork: *mut i32, ifail: *mut i32, info: *mut i32);
    pub fn dsyevx_(jobz: *const u8, range: *const u8, uplo: *const u8, n: *const i32, a: *mut f64, lda: *const i32, vl: *const f64, vu: *const f64, il: *const i32, iu: *const i32, abstol: *const f64, m: *mut i32, w: *mut f64, z: *mut f64, ldz: *const i32, work: *mut f64, lwork: *const i32, iwork: *mut i32, ifail: *mut i32, info: *mut i32);
    pub fn cheevx_(jobz: *const u8, range: *const u8, uplo: *const u8, n: *const i32, a: *mut c32, lda: *const i32, vl: *const f32, vu: *const f32, il: *const i32, iu: *const i32, abstol: *const f32, m: *mut i32, w: *mut f32, z: *mut c32, ldz: *const i32, work: *mut c32, lwork: *const i32, rwork: *mut f32, iwork: *mut i32, ifail: *mut i32, info: *mut i32);
    pub fn zheevx_(jobz: *const u8, range: *const u8, uplo: *const u8, n: *const i32, a: *mut c64, lda: *const i32, vl: *const f64, vu: *const f64, il: *const i32, iu: *const i32, abstol: *const f64, m: *mut i32, w: *mut f64, z: *mut c64, ldz: *const i32, work: *mut c64, lwork: *const i32, rwork: *mut f64, iwork: *mut i32, ifail: *mut i32, info: *mut i32);

    // ==================== Non-symmetric eigen ====================
    pub fn sgeev_(jobvl: *const u8, jobvr: *const u8, n: *const i32, a: *mut f32, lda: *const i32, wr: *mut f32, wi: *mut f32, vl: *mut f32, ldvl: *const i32, vr: *mut f32, ldvr: *const i32, work: *mut f32, lwork: *const i32, info: *mut i32);
    pub fn dgeev_(jobvl: *const u8, jobvr: *const u8, n: *const i32, a: *mut f64, lda: *const i32, wr: *mut f64, wi: *mut f64, vl: *mut f64, ldvl: *const i32, vr: *mut f64, ldvr: *const i32, work: *mut f64, lwork: *const i32, info: *mut i32);
    pub fn cgeev_(jobvl: *const u8, jobvr: *const u8, n: *const i32, a: *mut c32, lda: *const i32, w: *mut c32, vl: *mut c32, ldvl: *const i32, vr: *mut c32, ldvr: *const i32, work: *mut c32, lwork: *const i32, rwork: *mut f32, info: *mut i32);
    pub fn zgeev_(jobvl: *const u8, jobvr: *const u8, n: *const i32, a: *mut c64, lda: *const i32, w: *mut c64, vl: *mut c64, ldvl: *const i32, vr: *mut c64, ldvr: *const i32, work: *mut c64, lwork: *const i32, rwork: *mut f64, info: *mut i32);

    // ==================== SVD ====================
    pub fn sgesdd_(jobz: *const u8, m: *const i32, n: *const i32, a: *mut f32, lda: *const i32, s: *mut f32, u: *mut f32, ldu: *const i32, vt: *mut f32, ldvt: *const i32, work: *mut f32, lwork: *const i32, iwork: *mut i32, info: *mut i32);
    pub fn dgesdd_(jobz: *const u8, m: *const i32, n: *const i32, a: *mut f64, lda: *const i32, s: *mut f64, u: *mut f64, ldu: *const i32, vt: *mut f64, ldvt: *const i32, work: *mut f64, lwork: *const i32, iwork: *mut i32, info: *mut i32);
    pub fn cgesdd_(jobz: *const u8, m: *const i32, n: *const i32, a: *mut c32, lda: *const i32, s: *mut f32, u: *mut c32, ldu: *const i32, vt: *mut c32, ldvt: *const i32, work: *mut c32, lwork: *const i32, rwork: *mut f32, iwork: *mut i32, info: *mut i32);
    pub fn zgesdd_(jobz: *const u8, m: *const i32, n: *const i32, a: *mut c64, lda: *const i32, s: *mut f64, u: *mut c64, ldu: *const i32, vt: *mut c64, ldvt: *const i32, work: *mut c64, lwork: *const i32, rwork: *mut f64, iwork: *mut i32, info: *mut i32);

    // ==================== QR with column pivoting / RZ ====================
    pub fn sgeqp3_(m: *const i32, n: *const i32, a: *mut f32, lda: *const i32, jpvt: *mut i32, tau: *mut f32, work: *mut f32, lwork: *const i32, info: *mut i32);
    pub fn dgeqp3_(m: *const i32, n: *const i32, a: *mut f64, lda: *const i32, jpvt: *mut i32, tau: *mut f64, work: *mut f64, lwork: *const i32, info: *mut i32);
    pub fn cgeqp3_(m: *const i32, n: *const i32, a: *mut c32, lda: *const i32, jpvt: *mut i32, tau: *mut c32, work: *mut c32, lwork: *const i32, rwork: *mut f32, info: *mut i32);
    pub fn zgeqp3_(m: *const i32, n: *const i32, a: *mut c64, lda: *const i32, jpvt: *mut i32, tau: *mut c64, work: *mut c64, lwork: *const i32, rwork: *mut f64, info: *mut i32);

    pub fn stzrzf_(m: *const i32, n: *const i32, a: *mut f32, lda: *const i32, tau: *mut f32, work: *mut f32, lwork: *const i32, info: *mut i32);
    pub fn dtzrzf_(m: *const i32, n: *const i32, a: *mut f64, lda: *const i32, tau: *mut f64, work: *mut f64, lwork: *const i32, info: *mut i32);
    pub fn ctzrzf_(m: *const i32, n: *const i32, a: *mut c32, lda: *const i32, tau: *mut c32, work: *mut c32, lwork: *const i32, info: *mut i32);
    pub fn ztzrzf_(m: *const i32, n: *const i32, a: *mut c64, lda: *const i32, tau: *mut c64, work: *mut c64, lwork: *const i32, info: *mut i32);

    // ==================== Multiply by elementary reflectors ====================
    pub fn sormqr_(side: *const u8, trans: *const u8, m: *const i32, n: *const i32, k: *const i32, a: *const f32, lda: *const i32, tau: *const f32, c: *mut f32, ldc: *const i32, work: *mut f32, lwork: *const i32, info: *mut i32);
    pub fn dormqr_(side: *const u8, trans: *const u8, m: *const i32, n: *const i32, k: *const i32, a: *const f64, lda: *const i32, tau: *const f64, c: *mut f64, ldc: *const i32, work: *mut f64, lwork: *const i32, info: *mut i32);
    pub fn cunmqr_(side: *const u8, trans: *const u8, m: *const i32, n: *const i32, k: *const i32, a: *const c32, lda: *const i32, tau: *const c32, c: *mut c32, ldc: *const i32, work: *mut c32, lwork: *const i32, info: *mut i32);
    pub fn zunmqr_(side: *const u8, trans: *const u8, m: *const i32, n: *const i32, k: *const i32, a: *const c64, lda: *const i32, tau: *const c64, c: *mut c64, ldc: *const i32, work: *mut c64, lwork: *const i32, info: *mut i32);

    pub fn sormrz_(side: *const u8, trans: *const u8, m: *const i32, n: *const i32, k: *const i32, l: *const i32, a: *const f32, lda: *const i32, tau: *const f32, c: *mut f32, ldc: *const i32, work: *mut f32, lwork: *const i32, info: *mut i32);
    pub fn dormrz_(side: *const u8, trans: *const u8, m: *const i32, n: *const i32, k: *const i32, l: *const i32, a: *const f64, lda: *const i32, tau: *const f64, c: *mut f64, ldc: *const i32, work: *mut f64, lwork: *const i32, info: *mut i32);
    pub fn cunmrz_(side: *const u8, trans: *const u8, m: *const i32, n: *const i32, k: *const i32, l: *const i32, a: *const c32, lda: *const i32, tau: *const c32, c: *mut c32, ldc: *const i32, work: *mut c32, lwork: *const i32, info: *mut i32);
    pub fn zunmrz_(side: *const u8, trans: *const u8, m: *const i32, n: *const i32, k: *const i32, l: *const i32, a: *const c64, lda: *const i32, tau: *const c64, c: *mut c64, ldc: *const i32, work: *mut c64, lwork: *const i32, info: *mut i32);

    // ==================== Triangular solve (BLAS) ====================
    pub fn strsm_(side: *const u8, uplo: *const u8, transa: *const u8, diag: *const u8, m: *const i32, n: *const i32, alpha: *const f32, a: *const f32, lda: *const i32, b: *mut f32, ldb: *const i32);
    pub fn dtrsm_(side: *const u8, uplo: *const u8, transa: *const u8, diag: *const u8, m: *const i32, n: *const i32, alpha: *const f64, a: *const f64, lda: *const i32, b: *mut f64, ldb: *const i32);
    pub fn ctrsm_(side: *const u8, uplo: *const u8, transa: *const u8, diag: *const u8, m: *const i32, n: *const i32, alpha: *const c32, a: *const c32, lda: *const i32, b: *mut c32, ldb: *const i32);
    pub fn ztrsm_(side: *const u8, uplo: *const u8, transa: *const u8, diag: *const u8, m: *const i32, n: *const i32, alpha: *const c64, a: *const c64, lda: *const i32, b: *mut c64, ldb: *const i32);

    // ==================== Copy (BLAS) ====================
    pub fn scopy_(n: *const i32, x: *const f32, incx: *const i32, y: *mut f32, incy: *const i32);
    pub fn dcopy_(n: *const i32, x: *const f64, incx: *const i32, y: *mut f64, incy: *const i32);
    pub fn ccopy_(n: *const i32, x: *const c32, incx: *const i32, y: *mut c32, incy: *const i32);
    pub fn zcopy_(n: *const i32, x: *const c64, incx: *const i32, y: *mut c64, incy: *const i32);

    // ==================== Norm / scale / condition estimation ====================
    pub fn slange_(norm: *const u8, m: *const i32, n: *const i32, a: *const f32, lda: *const i32, work: *mut f32) -> f32;
    pub fn dlange_(norm: *const u8, m: *const i32, n: *const i32, a: *const f64, lda: *const i32, work: *mut f64) -> f64;
    pub fn clange_(norm: *const u8, m: *const i32, n: *const i32, a: *const c32, lda: *const i32, work: *mut f32) -> f32;
    pub fn zlange_(norm: *const u8, m: *const i32, n: *const i32, a: *const c64, lda: *const i32, work: *mut f64) -> f64;

    pub fn slascl_(mtype: *const u8, kl: *const i32, ku: *const i32, cfrom: *const f32, cto: *const f32, m: *const i32, n: *const i32, a: *mut f32, lda: *const i32, info: *mut i32);
    pub fn dlascl_(mtype: *const u8, kl: *const i32, ku: *const i32, cfrom: *const f64, cto: *const f64, m: *const i32, n: *const i32, a: *mut f64, lda: *const i32, info: *mut i32);
    pub fn clascl_(mtype: *const u8, kl: *const i32, ku: *const i32, cfrom: *const f32, cto: *const f32, m: *const i32, n: *const i32, a: *mut c32, lda: *const i32, info: *mut i32);
    pub fn zlascl_(mtype: *const u8, kl: *const i32, ku: *const i32, cfrom: *const f64, cto: *const f64, m: *const i32, n: *const i32, a: *mut c64, lda: *const i32, info: *mut i32);

    pub fn slaic1_(job: *const i32, j: *const i32, x: *const f32, sest: *const f32, w: *const f32, gamma: *const f32, sestpr: *mut f32, s: *mut f32, c: *mut f32);
    pub fn dlaic1_(job: *const i32, j: *const i32, x: *const f64, sest: *const f64, w: *const f64, gamma: *const f64, sestpr: *mut f64, s: *mut f64, c: *mut f64);
    pub fn claic1_(job: *const i32, j: *const i32, x: *const c32, sest: *const f32, w: *const c32, gamma: *const c32, sestpr: *mut f32, s: *mut c32, c: *mut c32);
    pub fn zlaic1_(job: *const i32, j: *const i32, x: *const c64, sest: *const f64, w: *const c64, gamma: *const c64, sestpr: *mut f64, s: *mut c64, c: *mut c64);

    // ==================== Machine parameters ====================
    pub fn slamch_(cmach: *const u8) -> f32;
    pub fn dlamch_(cmach: *const u8) -> f64;
}
