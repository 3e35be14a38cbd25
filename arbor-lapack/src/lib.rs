//! Thin type-dispatched interface to LAPACK and BLAS.
//!
//! One safe surface over the four scalar kinds {`f32`, `f64`,
//! `Complex<f32>`, `Complex<f64>`}: each operation is a generic free
//! function dispatching through the sealed [`Scalar`] trait to the matching
//! s/d/c/z FORTRAN routine. Matrices are column-major slices, FORTRAN
//! convention.
//!
//! Two rules hold everywhere:
//!
//! - **Workspace query idiom**: routines taking `lwork` are probed with
//!   `lwork = −1` first, the recommended size is read from the first work
//!   element, and the real call runs with a freshly allocated buffer scoped
//!   to the wrapper (released on every return path).
//! - **`info` verbatim**: wrappers return LAPACK's `info` unchanged and
//!   never interpret it. The caller decides what a nonzero code means.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::too_many_arguments, // LAPACK surfaces are wide by nature
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

mod ffi;

use num_complex::Complex;

/// Single-precision complex scalar.
pub type Complex32 = Complex<f32>;
/// Double-precision complex scalar.
pub type Complex64 = Complex<f64>;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for super::Complex32 {}
    impl Sealed for super::Complex64 {}
}

/// A LAPACK-supported scalar kind.
///
/// Implemented exactly four times; each associated function is the
/// specialization the generic free functions dispatch to.
#[allow(missing_docs)] // The free functions carry the operation docs.
pub trait Scalar: Copy + Default + private::Sealed + 'static {
    /// The associated real type (`f32` or `f64`).
    type Real: Copy + PartialOrd;

    /// Read a recommended workspace size out of a query result.
    fn lwork_of(self) -> i32;

    fn getrf(m: i32, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32]) -> i32;
    fn getrs(transpose: bool, n: i32, nrhs: i32, lu: &[Self], ipiv: &[i32], b: &mut [Self]) -> i32;
    fn gttrf(
        n: i32,
        dl: &mut [Self],
        d: &mut [Self],
        du: &mut [Self],
        du2: &mut [Self],
        ipiv: &mut [i32],
    ) -> i32;
    fn gbtrf(m: i32, n: i32, kl: i32, ku: i32, ab: &mut [Self], ldab: i32, ipiv: &mut [i32])
        -> i32;
    fn potrf(uplo: u8, n: i32, a: &mut [Self], lda: i32) -> i32;
    fn sytrf(uplo: u8, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32]) -> i32;
    fn syev(jobz: u8, uplo: u8, n: i32, a: &mut [Self], lda: i32, w: &mut [Self::Real]) -> i32;
    fn syevx(
        jobz: u8,
        range: u8,
        uplo: u8,
        n: i32,
        a: &mut [Self],
        lda: i32,
        vl: Self::Real,
        vu: Self::Real,
        il: i32,
        iu: i32,
        abstol: Self::Real,
        n_found: &mut i32,
        w: &mut [Self::Real],
        z: &mut [Self],
        ldz: i32,
        ifail: &mut [i32],
    ) -> i32;
    fn geev(
        n: i32,
        a: &mut [Self],
        lda: i32,
        values: &mut [Complex<Self::Real>],
        vr: &mut [Complex<Self::Real>],
        ldvr: i32,
    ) -> i32;
    fn gesdd(
        jobz: u8,
        m: i32,
        n: i32,
        a: &mut [Self],
        lda: i32,
        s: &mut [Self::Real],
        u: &mut [Self],
        ldu: i32,
        vt: &mut [Self],
        ldvt: i32,
    ) -> i32;
    fn geqp3(m: i32, n: i32, a: &mut [Self], lda: i32, jpvt: &mut [i32], tau: &mut [Self]) -> i32;
    fn tzrzf(m: i32, n: i32, a: &mut [Self], lda: i32, tau: &mut [Self]) -> i32;
    fn ormqr(
        side: u8,
        trans: u8,
        m: i32,
        n: i32,
        k: i32,
        a: &[Self],
        lda: i32,
        tau: &[Self],
        c: &mut [Self],
        ldc: i32,
    ) -> i32;
    fn ormrz(
        side: u8,
        trans: u8,
        m: i32,
        n: i32,
        k: i32,
        l: i32,
        a: &[Self],
        lda: i32,
        tau: &[Self],
        c: &mut [Self],
        ldc: i32,
    ) -> i32;
    fn trsm(
        side: u8,
        uplo: u8,
        transa: u8,
        diag: u8,
        m: i32,
        n: i32,
        alpha: Self,
        a: &[Self],
        lda: i32,
        b: &mut [Self],
        ldb: i32,
    );
    fn copy(n: i32, x: &[Self], incx: i32, y: &mut [Self], incy: i32);
    fn lange(norm: u8, m: i32, n: i32, a: &[Self], lda: i32) -> Self::Real;
    fn lascl(
        mtype: u8,
        kl: i32,
        ku: i32,
        cfrom: Self::Real,
        cto: Self::Real,
        m: i32,
        n: i32,
        a: &mut [Self],
        lda: i32,
    ) -> i32;
    fn laic1(
        job: i32,
        j: i32,
        x: &[Self],
        sest: Self::Real,
        w: &[Self],
        gamma: Self,
    ) -> (Self::Real, Self, Self);
    fn machine_precision() -> (Self::Real, Self::Real);
    fn machine_underflow() -> Self::Real;
}

/// Implementations for the two real kinds.
macro_rules! real_scalar {
    ($t:ty, $getrf:path, $getrs:path, $gttrf:path, $gbtrf:path, $potrf:path,
     $sytrf:path, $syev:path, $syevx:path, $geev:path, $gesdd:path,
     $geqp3:path, $tzrzf:path, $ormqr:path, $ormrz:path, $trsm:path,
     $copy:path, $lange:path, $lascl:path, $laic1:path, $lamch:path) => {
        impl Scalar for $t {
            type Real = $t;

            #[inline]
            fn lwork_of(self) -> i32 {
                self as i32
            }

            fn getrf(m: i32, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32]) -> i32 {
                let mut info = 0;
                unsafe { $getrf(&m, &n, a.as_mut_ptr(), &lda, ipiv.as_mut_ptr(), &mut info) };
                info
            }

            fn getrs(
                transpose: bool,
                n: i32,
                nrhs: i32,
                lu: &[Self],
                ipiv: &[i32],
                b: &mut [Self],
            ) -> i32 {
                let trans = if transpose { b'T' } else { b'N' };
                let mut info = 0;
                unsafe {
                    $getrs(
                        &trans,
                        &n,
                        &nrhs,
                        lu.as_ptr(),
                        &n,
                        ipiv.as_ptr(),
                        b.as_mut_ptr(),
                        &n,
                        &mut info,
                    );
                }
                info
            }

            fn gttrf(
                n: i32,
                dl: &mut [Self],
                d: &mut [Self],
                du: &mut [Self],
                du2: &mut [Self],
                ipiv: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                unsafe {
                    $gttrf(
                        &n,
                        dl.as_mut_ptr(),
                        d.as_mut_ptr(),
                        du.as_mut_ptr(),
                        du2.as_mut_ptr(),
                        ipiv.as_mut_ptr(),
                        &mut info,
                    );
                }
                info
            }

            fn gbtrf(
                m: i32,
                n: i32,
                kl: i32,
                ku: i32,
                ab: &mut [Self],
                ldab: i32,
                ipiv: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                unsafe {
                    $gbtrf(&m, &n, &kl, &ku, ab.as_mut_ptr(), &ldab, ipiv.as_mut_ptr(), &mut info);
                }
                info
            }

            fn potrf(uplo: u8, n: i32, a: &mut [Self], lda: i32) -> i32 {
                let mut info = 0;
                unsafe { $potrf(&uplo, &n, a.as_mut_ptr(), &lda, &mut info) };
                info
            }

            fn sytrf(uplo: u8, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32]) -> i32 {
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $sytrf(
                        &uplo,
                        &n,
                        a.as_mut_ptr(),
                        &lda,
                        ipiv.as_mut_ptr(),
                        wsize.as_mut_ptr(),
                        &query,
                        &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $sytrf(
                        &uplo,
                        &n,
                        a.as_mut_ptr(),
                        &lda,
                        ipiv.as_mut_ptr(),
                        work.as_mut_ptr(),
                        &lwork,
                        &mut info,
                    );
                }
                info
            }

            fn syev(jobz: u8, uplo: u8, n: i32, a: &mut [Self], lda: i32, w: &mut [Self]) -> i32 {
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $syev(
                        &jobz,
                        &uplo,
                        &n,
                        a.as_mut_ptr(),
                        &lda,
                        w.as_mut_ptr(),
                        wsize.as_mut_ptr(),
                        &query,
                        &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $syev(
                        &jobz,
                        &uplo,
                        &n,
                        a.as_mut_ptr(),
                        &lda,
                        w.as_mut_ptr(),
                        work.as_mut_ptr(),
                        &lwork,
                        &mut info,
                    );
                }
                info
            }

            fn syevx(
                jobz: u8,
                range: u8,
                uplo: u8,
                n: i32,
                a: &mut [Self],
                lda: i32,
                vl: Self,
                vu: Self,
                il: i32,
                iu: i32,
                abstol: Self,
                n_found: &mut i32,
                w: &mut [Self],
                z: &mut [Self],
                ldz: i32,
                ifail: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                let mut iwork = vec![0i32; 5 * n.max(1) as usize];
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $syevx(
                        &jobz, &range, &uplo, &n, a.as_mut_ptr(), &lda, &vl, &vu, &il, &iu,
                        &abstol, n_found, w.as_mut_ptr(), z.as_mut_ptr(), &ldz,
                        wsize.as_mut_ptr(), &query, iwork.as_mut_ptr(), ifail.as_mut_ptr(),
                        &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $syevx(
                        &jobz, &range, &uplo, &n, a.as_mut_ptr(), &lda, &vl, &vu, &il, &iu,
                        &abstol, n_found, w.as_mut_ptr(), z.as_mut_ptr(), &ldz,
                        work.as_mut_ptr(), &lwork, iwork.as_mut_ptr(), ifail.as_mut_ptr(),
                        &mut info,
                    );
                }
                info
            }

            fn geev(
                n: i32,
                a: &mut [Self],
                lda: i32,
                values: &mut [Complex<Self>],
                vr: &mut [Complex<Self>],
                ldvr: i32,
            ) -> i32 {
                let nn = n.max(0) as usize;
                let jobvl = b'N';
                let jobvr = b'V';
                let mut wr = vec![<$t>::default(); nn];
                let mut wi = vec![<$t>::default(); nn];
                let mut vr_real = vec![<$t>::default(); nn * nn];
                let mut vl_dummy = [<$t>::default(); 1];
                let ldvl = 1;
                let mut info = 0;

                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $geev(
                        &jobvl, &jobvr, &n, a.as_mut_ptr(), &lda, wr.as_mut_ptr(),
                        wi.as_mut_ptr(), vl_dummy.as_mut_ptr(), &ldvl, vr_real.as_mut_ptr(), &n,
                        wsize.as_mut_ptr(), &query, &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $geev(
                        &jobvl, &jobvr, &n, a.as_mut_ptr(), &lda, wr.as_mut_ptr(),
                        wi.as_mut_ptr(), vl_dummy.as_mut_ptr(), &ldvl, vr_real.as_mut_ptr(), &n,
                        work.as_mut_ptr(), &lwork, &mut info,
                    );
                }

                for i in 0..nn {
                    values[i] = Complex::new(wr[i], wi[i]);
                }

                // LAPACK packs conjugate pairs: a real eigenvalue's vector is
                // its column verbatim; a pair at columns (j, j+1) holds the
                // real part in j and the imaginary part in j+1, and the two
                // complex vectors are vr[:,j] ± i·vr[:,j+1].
                let ld = ldvr.max(1) as usize;
                let mut j = 0;
                while j < nn {
                    if wi[j] == 0.0 {
                        for i in 0..nn {
                            vr[j * ld + i] = Complex::new(vr_real[j * nn + i], 0.0);
                        }
                        j += 1;
                    } else {
                        for i in 0..nn {
                            let re = vr_real[j * nn + i];
                            let im = vr_real[(j + 1) * nn + i];
                            vr[j * ld + i] = Complex::new(re, im);
                            vr[(j + 1) * ld + i] = Complex::new(re, -im);
                        }
                        j += 2;
                    }
                }
                info
            }

            fn gesdd(
                jobz: u8,
                m: i32,
                n: i32,
                a: &mut [Self],
                lda: i32,
                s: &mut [Self],
                u: &mut [Self],
                ldu: i32,
                vt: &mut [Self],
                ldvt: i32,
            ) -> i32 {
                let mn = m.min(n).max(1);
                let mut iwork = vec![0i32; 8 * mn as usize];
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $gesdd(
                        &jobz, &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                        &ldu, vt.as_mut_ptr(), &ldvt, wsize.as_mut_ptr(), &query,
                        iwork.as_mut_ptr(), &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $gesdd(
                        &jobz, &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                        &ldu, vt.as_mut_ptr(), &ldvt, work.as_mut_ptr(), &lwork,
                        iwork.as_mut_ptr(), &mut info,
                    );
                }
                info
            }

            fn geqp3(
                m: i32,
                n: i32,
                a: &mut [Self],
                lda: i32,
                jpvt: &mut [i32],
                tau: &mut [Self],
            ) -> i32 {
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $geqp3(
                        &m, &n, a.as_mut_ptr(), &lda, jpvt.as_mut_ptr(), tau.as_mut_ptr(),
                        wsize.as_mut_ptr(), &query, &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $geqp3(
                        &m, &n, a.as_mut_ptr(), &lda, jpvt.as_mut_ptr(), tau.as_mut_ptr(),
                        work.as_mut_ptr(), &lwork, &mut info,
                    );
                }
                info
            }

            fn tzrzf(m: i32, n: i32, a: &mut [Self], lda: i32, tau: &mut [Self]) -> i32 {
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $tzrzf(
                        &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), wsize.as_mut_ptr(),
                        &query, &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $tzrzf(
                        &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), work.as_mut_ptr(),
                        &lwork, &mut info,
                    );
                }
                info
            }

            fn ormqr(
                side: u8,
                trans: u8,
                m: i32,
                n: i32,
                k: i32,
                a: &[Self],
                lda: i32,
                tau: &[Self],
                c: &mut [Self],
                ldc: i32,
            ) -> i32 {
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $ormqr(
                        &side, &trans, &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                        c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &query, &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $ormqr(
                        &side, &trans, &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                        c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info,
                    );
                }
                info
            }

            fn ormrz(
                side: u8,
                trans: u8,
                m: i32,
                n: i32,
                k: i32,
                l: i32,
                a: &[Self],
                lda: i32,
                tau: &[Self],
                c: &mut [Self],
                ldc: i32,
            ) -> i32 {
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $ormrz(
                        &side, &trans, &m, &n, &k, &l, a.as_ptr(), &lda, tau.as_ptr(),
                        c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &query, &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $ormrz(
                        &side, &trans, &m, &n, &k, &l, a.as_ptr(), &lda, tau.as_ptr(),
                        c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info,
                    );
                }
                info
            }

            fn trsm(
                side: u8,
                uplo: u8,
                transa: u8,
                diag: u8,
                m: i32,
                n: i32,
                alpha: Self,
                a: &[Self],
                lda: i32,
                b: &mut [Self],
                ldb: i32,
            ) {
                unsafe {
                    $trsm(
                        &side, &uplo, &transa, &diag, &m, &n, &alpha, a.as_ptr(), &lda,
                        b.as_mut_ptr(), &ldb,
                    );
                }
            }

            fn copy(n: i32, x: &[Self], incx: i32, y: &mut [Self], incy: i32) {
                unsafe { $copy(&n, x.as_ptr(), &incx, y.as_mut_ptr(), &incy) };
            }

            fn lange(norm: u8, m: i32, n: i32, a: &[Self], lda: i32) -> Self {
                let mut work = vec![<$t>::default(); m.max(1) as usize];
                unsafe { $lange(&norm, &m, &n, a.as_ptr(), &lda, work.as_mut_ptr()) }
            }

            fn lascl(
                mtype: u8,
                kl: i32,
                ku: i32,
                cfrom: Self,
                cto: Self,
                m: i32,
                n: i32,
                a: &mut [Self],
                lda: i32,
            ) -> i32 {
                let mut info = 0;
                unsafe {
                    $lascl(&mtype, &kl, &ku, &cfrom, &cto, &m, &n, a.as_mut_ptr(), &lda, &mut info);
                }
                info
            }

            fn laic1(
                job: i32,
                j: i32,
                x: &[Self],
                sest: Self,
                w: &[Self],
                gamma: Self,
            ) -> (Self, Self, Self) {
                let mut sestpr = <$t>::default();
                let mut s = <$t>::default();
                let mut c = <$t>::default();
                unsafe {
                    $laic1(
                        &job, &j, x.as_ptr(), &sest, w.as_ptr(), &gamma, &mut sestpr, &mut s,
                        &mut c,
                    );
                }
                (sestpr, s, c)
            }

            fn machine_precision() -> (Self, Self) {
                let sfmin = unsafe { $lamch(&b'S') };
                let prec = unsafe { $lamch(&b'P') };
                let small = sfmin / prec;
                (small, 1.0 / small)
            }

            fn machine_underflow() -> Self {
                unsafe { $lamch(&b'S') }
            }
        }
    };
}

real_scalar!(
    f32,
    ffi::sgetrf_,
    ffi::sgetrs_,
    ffi::sgttrf_,
    ffi::sgbtrf_,
    ffi::spotrf_,
    ffi::ssytrf_,
    ffi::ssyev_,
    ffi::ssyevx_,
    ffi::sgeev_,
    ffi::sgesdd_,
    ffi::sgeqp3_,
    ffi::stzrzf_,
    ffi::sormqr_,
    ffi::sormrz_,
    ffi::strsm_,
    ffi::scopy_,
    ffi::slange_,
    ffi::slascl_,
    ffi::slaic1_,
    ffi::slamch_
);
real_scalar!(
    f64,
    ffi::dgetrf_,
    ffi::dgetrs_,
    ffi::dgttrf_,
    ffi::dgbtrf_,
    ffi::dpotrf_,
    ffi::dsytrf_,
    ffi::dsyev_,
    ffi::dsyevx_,
    ffi::dgeev_,
    ffi::dgesdd_,
    ffi::dgeqp3_,
    ffi::dtzrzf_,
    ffi::dormqr_,
    ffi::dormrz_,
    ffi::dtrsm_,
    ffi::dcopy_,
    ffi::dlange_,
    ffi::dlascl_,
    ffi::dlaic1_,
    ffi::dlamch_
);

/// Implementations for the two complex kinds (Hermitian/unitary drivers
/// where LAPACK splits the symmetric/orthogonal names).
macro_rules! complex_scalar {
    ($t:ty, $real:ty, $getrf:path, $getrs:path, $gttrf:path, $gbtrf:path,
     $potrf:path, $sytrf:path, $heev:path, $heevx:path, $geev:path,
     $gesdd:path, $geqp3:path, $tzrzf:path, $unmqr:path, $unmrz:path,
     $trsm:path, $copy:path, $lange:path, $lascl:path, $laic1:path,
     $lamch:path) => {
        impl Scalar for $t {
            type Real = $real;

            #[inline]
            fn lwork_of(self) -> i32 {
                self.re as i32
            }

            fn getrf(m: i32, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32]) -> i32 {
                let mut info = 0;
                unsafe { $getrf(&m, &n, a.as_mut_ptr(), &lda, ipiv.as_mut_ptr(), &mut info) };
                info
            }

            fn getrs(
                transpose: bool,
                n: i32,
                nrhs: i32,
                lu: &[Self],
                ipiv: &[i32],
                b: &mut [Self],
            ) -> i32 {
                let trans = if transpose { b'T' } else { b'N' };
                let mut info = 0;
                unsafe {
                    $getrs(
                        &trans,
                        &n,
                        &nrhs,
                        lu.as_ptr(),
                        &n,
                        ipiv.as_ptr(),
                        b.as_mut_ptr(),
                        &n,
                        &mut info,
                    );
                }
                info
            }

            fn gttrf(
                n: i32,
                dl: &mut [Self],
                d: &mut [Self],
                du: &mut [Self],
                du2: &mut [Self],
                ipiv: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                unsafe {
                    $gttrf(
                        &n,
                        dl.as_mut_ptr(),
                        d.as_mut_ptr(),
                        du.as_mut_ptr(),
                        du2.as_mut_ptr(),
                        ipiv.as_mut_ptr(),
                        &mut info,
                    );
                }
                info
            }

            fn gbtrf(
                m: i32,
                n: i32,
                kl: i32,
                ku: i32,
                ab: &mut [Self],
                ldab: i32,
                ipiv: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                unsafe {
                    $gbtrf(&m, &n, &kl, &ku, ab.as_mut_ptr(), &ldab, ipiv.as_mut_ptr(), &mut info);
                }
                info
            }

            fn potrf(uplo: u8, n: i32, a: &mut [Self], lda: i32) -> i32 {
                let mut info = 0;
                unsafe { $potrf(&uplo, &n, a.as_mut_ptr(), &lda, &mut info) };
                info
            }

            fn sytrf(uplo: u8, n: i32, a: &mut [Self], lda: i32, ipiv: &mut [i32]) -> i32 {
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $sytrf(
                        &uplo,
                        &n,
                        a.as_mut_ptr(),
                        &lda,
                        ipiv.as_mut_ptr(),
                        wsize.as_mut_ptr(),
                        &query,
                        &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $sytrf(
                        &uplo,
                        &n,
                        a.as_mut_ptr(),
                        &lda,
                        ipiv.as_mut_ptr(),
                        work.as_mut_ptr(),
                        &lwork,
                        &mut info,
                    );
                }
                info
            }

            fn syev(
                jobz: u8,
                uplo: u8,
                n: i32,
                a: &mut [Self],
                lda: i32,
                w: &mut [Self::Real],
            ) -> i32 {
                let mut info = 0;
                let mut rwork = vec![<$real>::default(); (3 * n - 2).max(1) as usize];
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $heev(
                        &jobz,
                        &uplo,
                        &n,
                        a.as_mut_ptr(),
                        &lda,
                        w.as_mut_ptr(),
                        wsize.as_mut_ptr(),
                        &query,
                        rwork.as_mut_ptr(),
                        &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $heev(
                        &jobz,
                        &uplo,
                        &n,
                        a.as_mut_ptr(),
                        &lda,
                        w.as_mut_ptr(),
                        work.as_mut_ptr(),
                        &lwork,
                        rwork.as_mut_ptr(),
                        &mut info,
                    );
                }
                info
            }

            fn syevx(
                jobz: u8,
                range: u8,
                uplo: u8,
                n: i32,
                a: &mut [Self],
                lda: i32,
                vl: Self::Real,
                vu: Self::Real,
                il: i32,
                iu: i32,
                abstol: Self::Real,
                n_found: &mut i32,
                w: &mut [Self::Real],
                z: &mut [Self],
                ldz: i32,
                ifail: &mut [i32],
            ) -> i32 {
                let mut info = 0;
                let mut iwork = vec![0i32; 5 * n.max(1) as usize];
                let mut rwork = vec![<$real>::default(); 7 * n.max(1) as usize];
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $heevx(
                        &jobz, &range, &uplo, &n, a.as_mut_ptr(), &lda, &vl, &vu, &il, &iu,
                        &abstol, n_found, w.as_mut_ptr(), z.as_mut_ptr(), &ldz,
                        wsize.as_mut_ptr(), &query, rwork.as_mut_ptr(), iwork.as_mut_ptr(),
                        ifail.as_mut_ptr(), &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $heevx(
                        &jobz, &range, &uplo, &n, a.as_mut_ptr(), &lda, &vl, &vu, &il, &iu,
                        &abstol, n_found, w.as_mut_ptr(), z.as_mut_ptr(), &ldz,
                        work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(), iwork.as_mut_ptr(),
                        ifail.as_mut_ptr(), &mut info,
                    );
                }
                info
            }

            fn geev(
                n: i32,
                a: &mut [Self],
                lda: i32,
                values: &mut [Self],
                vr: &mut [Self],
                ldvr: i32,
            ) -> i32 {
                // Complex kinds need no conjugate-pair re-expansion.
                let jobvl = b'N';
                let jobvr = b'V';
                let mut vl_dummy = [<$t>::default(); 1];
                let ldvl = 1;
                let mut rwork = vec![<$real>::default(); 2 * n.max(1) as usize];
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $geev(
                        &jobvl, &jobvr, &n, a.as_mut_ptr(), &lda, values.as_mut_ptr(),
                        vl_dummy.as_mut_ptr(), &ldvl, vr.as_mut_ptr(), &ldvr,
                        wsize.as_mut_ptr(), &query, rwork.as_mut_ptr(), &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $geev(
                        &jobvl, &jobvr, &n, a.as_mut_ptr(), &lda, values.as_mut_ptr(),
                        vl_dummy.as_mut_ptr(), &ldvl, vr.as_mut_ptr(), &ldvr,
                        work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(), &mut info,
                    );
                }
                info
            }

            fn gesdd(
                jobz: u8,
                m: i32,
                n: i32,
                a: &mut [Self],
                lda: i32,
                s: &mut [Self::Real],
                u: &mut [Self],
                ldu: i32,
                vt: &mut [Self],
                ldvt: i32,
            ) -> i32 {
                let mn = m.min(n).max(1);
                // Real workspace depends on whether singular vectors are
                // requested: 5·mn for jobz == 'N', 5·mn² + 7·mn otherwise.
                let lrwork = if jobz == b'N' {
                    5 * mn
                } else {
                    5 * mn * mn + 7 * mn
                };
                let mut rwork = vec![<$real>::default(); lrwork as usize];
                let mut iwork = vec![0i32; 8 * mn as usize];
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $gesdd(
                        &jobz, &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                        &ldu, vt.as_mut_ptr(), &ldvt, wsize.as_mut_ptr(), &query,
                        rwork.as_mut_ptr(), iwork.as_mut_ptr(), &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $gesdd(
                        &jobz, &m, &n, a.as_mut_ptr(), &lda, s.as_mut_ptr(), u.as_mut_ptr(),
                        &ldu, vt.as_mut_ptr(), &ldvt, work.as_mut_ptr(), &lwork,
                        rwork.as_mut_ptr(), iwork.as_mut_ptr(), &mut info,
                    );
                }
                info
            }

            fn geqp3(
                m: i32,
                n: i32,
                a: &mut [Self],
                lda: i32,
                jpvt: &mut [i32],
                tau: &mut [Self],
            ) -> i32 {
                let mut rwork = vec![<$real>::default(); 2 * n.max(1) as usize];
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $geqp3(
                        &m, &n, a.as_mut_ptr(), &lda, jpvt.as_mut_ptr(), tau.as_mut_ptr(),
                        wsize.as_mut_ptr(), &query, rwork.as_mut_ptr(), &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $geqp3(
                        &m, &n, a.as_mut_ptr(), &lda, jpvt.as_mut_ptr(), tau.as_mut_ptr(),
                        work.as_mut_ptr(), &lwork, rwork.as_mut_ptr(), &mut info,
                    );
                }
                info
            }

            fn tzrzf(m: i32, n: i32, a: &mut [Self], lda: i32, tau: &mut [Self]) -> i32 {
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $tzrzf(
                        &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), wsize.as_mut_ptr(),
                        &query, &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $tzrzf(
                        &m, &n, a.as_mut_ptr(), &lda, tau.as_mut_ptr(), work.as_mut_ptr(),
                        &lwork, &mut info,
                    );
                }
                info
            }

            fn ormqr(
                side: u8,
                trans: u8,
                m: i32,
                n: i32,
                k: i32,
                a: &[Self],
                lda: i32,
                tau: &[Self],
                c: &mut [Self],
                ldc: i32,
            ) -> i32 {
                // The unitary driver takes 'C' where the orthogonal one
                // takes 'T'.
                let trans = if trans == b'T' { b'C' } else { trans };
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $unmqr(
                        &side, &trans, &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                        c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &query, &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $unmqr(
                        &side, &trans, &m, &n, &k, a.as_ptr(), &lda, tau.as_ptr(),
                        c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info,
                    );
                }
                info
            }

            fn ormrz(
                side: u8,
                trans: u8,
                m: i32,
                n: i32,
                k: i32,
                l: i32,
                a: &[Self],
                lda: i32,
                tau: &[Self],
                c: &mut [Self],
                ldc: i32,
            ) -> i32 {
                let trans = if trans == b'T' { b'C' } else { trans };
                let mut info = 0;
                let mut wsize = [<$t>::default(); 1];
                let query = -1;
                unsafe {
                    $unmrz(
                        &side, &trans, &m, &n, &k, &l, a.as_ptr(), &lda, tau.as_ptr(),
                        c.as_mut_ptr(), &ldc, wsize.as_mut_ptr(), &query, &mut info,
                    );
                }
                let lwork = wsize[0].lwork_of().max(1);
                let mut work = vec![<$t>::default(); lwork as usize];
                unsafe {
                    $unmrz(
                        &side, &trans, &m, &n, &k, &l, a.as_ptr(), &lda, tau.as_ptr(),
                        c.as_mut_ptr(), &ldc, work.as_mut_ptr(), &lwork, &mut info,
                    );
                }
                info
            }

            fn trsm(
                side: u8,
                uplo: u8,
                transa: u8,
                diag: u8,
                m: i32,
                n: i32,
                alpha: Self,
                a: &[Self],
                lda: i32,
                b: &mut [Self],
                ldb: i32,
            ) {
                unsafe {
                    $trsm(
                        &side, &uplo, &transa, &diag, &m, &n, &alpha, a.as_ptr(), &lda,
                        b.as_mut_ptr(), &ldb,
                    );
                }
            }

            fn copy(n: i32, x: &[Self], incx: i32, y: &mut [Self], incy: i32) {
                unsafe { $copy(&n, x.as_ptr(), &incx, y.as_mut_ptr(), &incy) };
            }

            fn lange(norm: u8, m: i32, n: i32, a: &[Self], lda: i32) -> Self::Real {
                let mut work = vec![<$real>::default(); m.max(1) as usize];
                unsafe { $lange(&norm, &m, &n, a.as_ptr(), &lda, work.as_mut_ptr()) }
            }

            fn lascl(
                mtype: u8,
                kl: i32,
                ku: i32,
                cfrom: Self::Real,
                cto: Self::Real,
                m: i32,
                n: i32,
                a: &mut [Self],
                lda: i32,
            ) -> i32 {
                let mut info = 0;
                unsafe {
                    $lascl(&mtype, &kl, &ku, &cfrom, &cto, &m, &n, a.as_mut_ptr(), &lda, &mut info);
                }
                info
            }

            fn laic1(
                job: i32,
                j: i32,
                x: &[Self],
                sest: Self::Real,
                w: &[Self],
                gamma: Self,
            ) -> (Self::Real, Self, Self) {
                let mut sestpr = <$real>::default();
                let mut s = <$t>::default();
                let mut c = <$t>::default();
                unsafe {
                    $laic1(
                        &job, &j, x.as_ptr(), &sest, w.as_ptr(), &gamma, &mut sestpr, &mut s,
                        &mut c,
                    );
                }
                (sestpr, s, c)
            }

            fn machine_precision() -> (Self::Real, Self::Real) {
                let sfmin = unsafe { $lamch(&b'S') };
                let prec = unsafe { $lamch(&b'P') };
                let small = sfmin / prec;
                (small, 1.0 / small)
            }

            fn machine_underflow() -> Self::Real {
                unsafe { $lamch(&b'S') }
            }
        }
    };
}

complex_scalar!(
    Complex32,
    f32,
    ffi::cgetrf_,
    ffi::cgetrs_,
    ffi::cgttrf_,
    ffi::cgbtrf_,
    ffi::cpotrf_,
    ffi::csytrf_,
    ffi::cheev_,
    ffi::cheevx_,
    ffi::cgeev_,
    ffi::cgesdd_,
    ffi::cgeqp3_,
    ffi::ctzrzf_,
    ffi::cunmqr_,
    ffi::cunmrz_,
    ffi::ctrsm_,
    ffi::ccopy_,
    ffi::clange_,
    ffi::clascl_,
    ffi::claic1_,
    ffi::slamch_
);
complex_scalar!(
    Complex64,
    f64,
    ffi::zgetrf_,
    ffi::zgetrs_,
    ffi::zgttrf_,
    ffi::zgbtrf_,
    ffi::zpotrf_,
    ffi::zsytrf_,
    ffi::zheev_,
    ffi::zheevx_,
    ffi::zgeev_,
    ffi::zgesdd_,
    ffi::zgeqp3_,
    ffi::ztzrzf_,
    ffi::zunmqr_,
    ffi::zunmrz_,
    ffi::ztrsm_,
    ffi::zcopy_,
    ffi::zlange_,
    ffi::zlascl_,
    ffi::zlaic1_,
    ffi::dlamch_
);

// ==================== Generic entry points ====================

/// LU factorization in place (`?getrf`). `a` is m×n column-major; `ipiv`
/// receives min(m, n) pivots.
pub fn getrf<T: Scalar>(m: i32, n: i32, a: &mut [T], lda: i32, ipiv: &mut [i32]) -> i32 {
    T::getrf(m, n, a, lda, ipiv)
}

/// Solve using an LU factorization from [`getrf`] (`?getrs`). `b` holds the
/// right-hand sides on entry and the solutions on exit.
pub fn getrs<T: Scalar>(
    transpose: bool,
    n: i32,
    nrhs: i32,
    lu: &[T],
    ipiv: &[i32],
    b: &mut [T],
) -> i32 {
    T::getrs(transpose, n, nrhs, lu, ipiv, b)
}

/// Tridiagonal LU factorization (`?gttrf`).
pub fn gttrf<T: Scalar>(
    n: i32,
    dl: &mut [T],
    d: &mut [T],
    du: &mut [T],
    du2: &mut [T],
    ipiv: &mut [i32],
) -> i32 {
    T::gttrf(n, dl, d, du, du2, ipiv)
}

/// Banded LU factorization (`?gbtrf`).
pub fn gbtrf<T: Scalar>(
    m: i32,
    n: i32,
    kl: i32,
    ku: i32,
    ab: &mut [T],
    ldab: i32,
    ipiv: &mut [i32],
) -> i32 {
    T::gbtrf(m, n, kl, ku, ab, ldab, ipiv)
}

/// Cholesky factorization (`?potrf`).
pub fn potrf<T: Scalar>(uplo: u8, n: i32, a: &mut [T], lda: i32) -> i32 {
    T::potrf(uplo, n, a, lda)
}

/// Symmetric-indefinite (Bunch–Kaufman) factorization (`?sytrf`).
pub fn sytrf<T: Scalar>(uplo: u8, n: i32, a: &mut [T], lda: i32, ipiv: &mut [i32]) -> i32 {
    T::sytrf(uplo, n, a, lda, ipiv)
}

/// Full symmetric (Hermitian for complex kinds) eigendecomposition
/// (`?syev` / `?heev`). Eigenvectors overwrite `a` when `jobz == b'V'`.
pub fn syev<T: Scalar>(
    jobz: u8,
    uplo: u8,
    n: i32,
    a: &mut [T],
    lda: i32,
    w: &mut [T::Real],
) -> i32 {
    T::syev(jobz, uplo, n, a, lda, w)
}

/// Selective symmetric eigendecomposition (`?syevx` / `?heevx`): a value
/// range (`range == b'V'`) or index range (`b'I'`) of the spectrum.
pub fn syevx<T: Scalar>(
    jobz: u8,
    range: u8,
    uplo: u8,
    n: i32,
    a: &mut [T],
    lda: i32,
    vl: T::Real,
    vu: T::Real,
    il: i32,
    iu: i32,
    abstol: T::Real,
    n_found: &mut i32,
    w: &mut [T::Real],
    z: &mut [T],
    ldz: i32,
    ifail: &mut [i32],
) -> i32 {
    T::syevx(
        jobz, range, uplo, n, a, lda, vl, vu, il, iu, abstol, n_found, w, z, ldz, ifail,
    )
}

/// Non-symmetric eigendecomposition with right eigenvectors (`?geev`).
///
/// For the real kinds, LAPACK's packed conjugate-pair convention is
/// re-expanded: a real eigenvalue's column is taken verbatim with zero
/// imaginary part; a conjugate pair at columns (j, j+1) becomes the two
/// explicit complex vectors `vr[:,j] ± i·vr[:,j+1]`.
pub fn geev<T: Scalar>(
    n: i32,
    a: &mut [T],
    lda: i32,
    values: &mut [Complex<T::Real>],
    vr: &mut [Complex<T::Real>],
    ldvr: i32,
) -> i32 {
    T::geev(n, a, lda, values, vr, ldvr)
}

/// Singular value decomposition, divide-and-conquer (`?gesdd`).
pub fn gesdd<T: Scalar>(
    jobz: u8,
    m: i32,
    n: i32,
    a: &mut [T],
    lda: i32,
    s: &mut [T::Real],
    u: &mut [T],
    ldu: i32,
    vt: &mut [T],
    ldvt: i32,
) -> i32 {
    T::gesdd(jobz, m, n, a, lda, s, u, ldu, vt, ldvt)
}

/// QR factorization with column pivoting (`?geqp3`).
pub fn geqp3<T: Scalar>(
    m: i32,
    n: i32,
    a: &mut [T],
    lda: i32,
    jpvt: &mut [i32],
    tau: &mut [T],
) -> i32 {
    T::geqp3(m, n, a, lda, jpvt, tau)
}

/// Trapezoidal-to-triangular RZ factorization (`?tzrzf`).
pub fn tzrzf<T: Scalar>(m: i32, n: i32, a: &mut [T], lda: i32, tau: &mut [T]) -> i32 {
    T::tzrzf(m, n, a, lda, tau)
}

/// Multiply by the orthogonal/unitary factor from a QR factorization
/// (`?ormqr` / `?unmqr`). `trans == b'T'` is mapped to `b'C'` for the
/// complex kinds.
pub fn ormqr<T: Scalar>(
    side: u8,
    trans: u8,
    m: i32,
    n: i32,
    k: i32,
    a: &[T],
    lda: i32,
    tau: &[T],
    c: &mut [T],
    ldc: i32,
) -> i32 {
    T::ormqr(side, trans, m, n, k, a, lda, tau, c, ldc)
}

/// Multiply by the orthogonal/unitary factor from an RZ factorization
/// (`?ormrz` / `?unmrz`).
pub fn ormrz<T: Scalar>(
    side: u8,
    trans: u8,
    m: i32,
    n: i32,
    k: i32,
    l: i32,
    a: &[T],
    lda: i32,
    tau: &[T],
    c: &mut [T],
    ldc: i32,
) -> i32 {
    T::ormrz(side, trans, m, n, k, l, a, lda, tau, c, ldc)
}

/// Triangular solve with multiple right-hand sides (`?trsm`).
pub fn trsm<T: Scalar>(
    side: u8,
    uplo: u8,
    transa: u8,
    diag: u8,
    m: i32,
    n: i32,
    alpha: T,
    a: &[T],
    lda: i32,
    b: &mut [T],
    ldb: i32,
) {
    T::trsm(side, uplo, transa, diag, m, n, alpha, a, lda, b, ldb);
}

/// Vector copy (`?copy`).
pub fn copy<T: Scalar>(n: i32, x: &[T], incx: i32, y: &mut [T], incy: i32) {
    T::copy(n, x, incx, y, incy);
}

/// Matrix norm (`?lange`): `b'1'`, `b'I'`, `b'F'`, or `b'M'`.
pub fn lange<T: Scalar>(norm: u8, m: i32, n: i32, a: &[T], lda: i32) -> T::Real {
    T::lange(norm, m, n, a, lda)
}

/// Safe in-place matrix scaling by `cto/cfrom` (`?lascl`).
pub fn lascl<T: Scalar>(
    mtype: u8,
    kl: i32,
    ku: i32,
    cfrom: T::Real,
    cto: T::Real,
    m: i32,
    n: i32,
    a: &mut [T],
    lda: i32,
) -> i32 {
    T::lascl(mtype, kl, ku, cfrom, cto, m, n, a, lda)
}

/// Incremental condition estimation (`?laic1`): returns
/// (`sestpr`, `s`, `c`).
pub fn laic1<T: Scalar>(
    job: i32,
    j: i32,
    x: &[T],
    sest: T::Real,
    w: &[T],
    gamma: T,
) -> (T::Real, T, T) {
    T::laic1(job, j, x, sest, w, gamma)
}

/// Machine precision bounds from `?lamch`: (safe small number, its
/// reciprocal).
pub fn machine_precision<T: Scalar>() -> (T::Real, T::Real) {
    T::machine_precision()
}

/// Machine underflow threshold (`?lamch('S')`).
pub fn machine_underflow<T: Scalar>() -> T::Real {
    T::machine_underflow()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Column-major dense matvec for checking results.
    fn matvec(n: usize, a: &[f64], x: &[f64]) -> Vec<f64> {
        let mut y = vec![0.0; n];
        for j in 0..n {
            for i in 0..n {
                y[i] += a[j * n + i] * x[j];
            }
        }
        y
    }

    /// LU round trip on a random 5×5 positive-definite system:
    /// A·(A⁻¹·b) = b to 1e-10 in double precision.
    #[test]
    fn test_lu_round_trip_f64() {
        let n = 5usize;
        let mut rng = StdRng::seed_from_u64(7);
        let b_mat: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();

        // A = BᵀB + n·I is symmetric positive definite.
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += b_mat[i * n + k] * b_mat[j * n + k];
                }
                a[j * n + i] = sum + if i == j { n as f64 } else { 0.0 };
            }
        }

        let rhs: Vec<f64> = (0..n).map(|i| (i as f64) - 2.0).collect();
        let mut lu = a.clone();
        let mut ipiv = vec![0i32; n];
        let info = getrf(n as i32, n as i32, &mut lu, n as i32, &mut ipiv);
        assert_eq!(info, 0);

        let mut x = rhs.clone();
        let info = getrs(false, n as i32, 1, &lu, &ipiv, &mut x);
        assert_eq!(info, 0);

        let ax = matvec(n, &a, &x);
        for i in 0..n {
            assert_relative_eq!(ax[i], rhs[i], epsilon = 1e-10);
        }
    }

    /// Complex LU round trip (double-complex kind).
    #[test]
    fn test_lu_round_trip_c64() {
        let n = 4usize;
        let mut rng = StdRng::seed_from_u64(11);
        let mut a: Vec<Complex64> = (0..n * n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        // Diagonal dominance keeps it comfortably nonsingular.
        for i in 0..n {
            a[i * n + i] += Complex64::new(4.0, 0.0);
        }

        let rhs: Vec<Complex64> = (0..n).map(|i| Complex64::new(i as f64, 1.0)).collect();
        let mut lu = a.clone();
        let mut ipiv = vec![0i32; n];
        assert_eq!(getrf(n as i32, n as i32, &mut lu, n as i32, &mut ipiv), 0);
        let mut x = rhs.clone();
        assert_eq!(getrs(false, n as i32, 1, &lu, &ipiv, &mut x), 0);

        for i in 0..n {
            let mut ax = Complex64::new(0.0, 0.0);
            for j in 0..n {
                ax += a[j * n + i] * x[j];
            }
            assert_relative_eq!(ax.re, rhs[i].re, epsilon = 1e-10);
            assert_relative_eq!(ax.im, rhs[i].im, epsilon = 1e-10);
        }
    }

    /// Cholesky of a positive-definite matrix succeeds; of an indefinite
    /// one reports the offending leading minor through `info`.
    #[test]
    fn test_potrf_info_verbatim() {
        let mut pd = vec![4.0, 1.0, 1.0, 3.0]; // column-major 2×2
        assert_eq!(potrf::<f64>(b'L', 2, &mut pd, 2), 0);

        let mut indef = vec![1.0, 2.0, 2.0, 1.0];
        let info = potrf::<f64>(b'L', 2, &mut indef, 2);
        assert!(info > 0, "indefinite matrix must fail with positive info");
    }

    /// Symmetric eigendecomposition: eigenvalues of a known 2×2.
    #[test]
    fn test_syev_known_spectrum() {
        // [[2, 1], [1, 2]] has eigenvalues 1 and 3.
        let mut a = vec![2.0, 1.0, 1.0, 2.0];
        let mut w = vec![0.0f64; 2];
        let info = syev(b'V', b'L', 2, &mut a, 2, &mut w);
        assert_eq!(info, 0);
        assert_relative_eq!(w[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(w[1], 3.0, epsilon = 1e-12);
    }

    /// Non-symmetric eigen: the rotation generator [[0, −1], [1, 0]] has
    /// eigenvalues ±i; the re-expanded complex vectors must satisfy
    /// A·v = λ·v.
    #[test]
    fn test_geev_conjugate_pair_expansion() {
        let n = 2usize;
        let a_orig = [0.0, 1.0, -1.0, 0.0]; // column-major
        let mut a = a_orig;
        let mut values = vec![Complex64::new(0.0, 0.0); n];
        let mut vr = vec![Complex64::new(0.0, 0.0); n * n];
        let info = geev(n as i32, &mut a, n as i32, &mut values, &mut vr, n as i32);
        assert_eq!(info, 0);

        assert_relative_eq!(values[0].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(values[0].im.abs(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(values[1].im, -values[0].im, epsilon = 1e-12);

        // A·v = λ·v for each re-expanded eigenpair.
        for j in 0..n {
            for i in 0..n {
                let mut av = Complex64::new(0.0, 0.0);
                for k in 0..n {
                    av += a_orig[k * n + i] * vr[j * n + k];
                }
                let lv = values[j] * vr[j * n + i];
                assert_relative_eq!(av.re, lv.re, epsilon = 1e-12);
                assert_relative_eq!(av.im, lv.im, epsilon = 1e-12);
            }
        }
    }

    /// SVD of a diagonal matrix returns the absolute diagonal, sorted.
    #[test]
    fn test_gesdd_diagonal() {
        let n = 3usize;
        let mut a = vec![0.0f64; n * n];
        a[0] = -2.0;
        a[4] = 5.0;
        a[8] = 1.0;
        let mut s = vec![0.0f64; n];
        let mut u = vec![0.0f64; n * n];
        let mut vt = vec![0.0f64; n * n];
        let info = gesdd(
            b'A', n as i32, n as i32, &mut a, n as i32, &mut s, &mut u, n as i32, &mut vt,
            n as i32,
        );
        assert_eq!(info, 0);
        assert_relative_eq!(s[0], 5.0, epsilon = 1e-12);
        assert_relative_eq!(s[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(s[2], 1.0, epsilon = 1e-12);
    }

    /// Triangular solve: L·x = b with unit lower L.
    #[test]
    fn test_trsm_lower() {
        // L = [[1, 0], [2, 1]] column-major.
        let l = vec![1.0, 2.0, 0.0, 1.0];
        let mut b = vec![1.0, 4.0];
        trsm(b'L', b'L', b'N', b'U', 2, 1, 1.0f64, &l, 2, &mut b, 2);
        assert_relative_eq!(b[0], 1.0, epsilon = 1e-14);
        assert_relative_eq!(b[1], 2.0, epsilon = 1e-14);
    }

    /// Machine parameters are sane for both precisions.
    #[test]
    fn test_machine_parameters() {
        let (small64, big64) = machine_precision::<f64>();
        assert!(small64 > 0.0 && small64 < 1e-200);
        assert!(big64 > 1e200);
        assert!(machine_underflow::<f64>() > 0.0);

        let (small32, big32) = machine_precision::<f32>();
        assert!(small32 > 0.0 && small32 < 1e-20);
        assert!(big32 > 1e20);
    }

    /// lange and lascl agree: scaling a matrix by 2 doubles its norm.
    #[test]
    fn test_lange_lascl() {
        let mut a = vec![1.0f64, -3.0, 2.0, 0.5];
        let before = lange(b'M', 2, 2, &a, 2);
        assert_eq!(lascl(b'G', 0, 0, 1.0, 2.0, 2, 2, &mut a, 2), 0);
        let after = lange(b'M', 2, 2, &a, 2);
        assert_relative_eq!(after, 2.0 * before, epsilon = 1e-14);
    }
}
