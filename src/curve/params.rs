//! Concrete parameters for the two curves this crate signs over: the
//! Service Provider Key (SPK / License Server ID) curve and the License Key
//! Pack (LKP) curve.
//!
//! `BigUint` has no `const fn` constructor from a decimal string, so each
//! curve is built once behind a [`once_cell::sync::Lazy`] rather than as an
//! associated constant.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use super::{CurveParams, Point};

fn biguint(decimal: &str) -> BigUint {
    decimal.parse().expect("curve parameter literal is valid decimal")
}

static SPK_CURVE: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    a: biguint("1"),
    b: biguint("0"),
    p: biguint("21782971228112002125810473336838725345308036616026120243639513697227789232461459408261967852943809534324870610618161"),
    n: biguint("629063109922370885449"),
    g: Point::affine(
        biguint("10692194187797070010417373067833672857716423048889432566885309624149667762706899929433420143814127803064297378514651"),
        biguint("14587399915883137990539191966406864676102477026583239850923355829082059124877792299572208431243410905713755917185109"),
    ),
    k: Point::affine(
        biguint("3917395608307488535457389605368226854270150445881753750395461980792533894109091921400661704941484971683063487980768"),
        biguint("8858262671783403684463979458475735219807686373661776500155868309933327116988404547349319879900761946444470688332645"),
    ),
    priv_key: biguint("153862071918555979944"),
});

static LKP_CURVE: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    a: biguint("1"),
    b: biguint("0"),
    p: biguint("28688293616765795404141427476803815352899912533728694325464374376776313457785622361119232589082131818578591461837297"),
    n: biguint("675048016158598417213"),
    g: Point::affine(
        biguint("18999816458520350299014628291870504329073391058325678653840191278128672378485029664052827205905352913351648904170809"),
        biguint("7233699725243644729688547165924232430035643592445942846958231777803539836627943189850381859836033366776176689124317"),
    ),
    k: Point::affine(
        biguint("7147768390112741602848314103078506234267895391544114241891627778383312460777957307647946308927283757886117119137500"),
        biguint("20525272195909974311677173484301099561025532568381820845650748498800315498040161314197178524020516408371544778243934"),
    ),
    priv_key: biguint("100266970209474387075"),
});

/// Which key kind a curve / payload / signature belongs to. The two kinds
/// never share curve parameters or payload layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    /// Service Provider Key, aka License Server ID.
    Spk,
    /// License Key Pack.
    Lkp,
}

/// Returns the Service Provider Key curve.
pub fn spk_curve() -> &'static CurveParams {
    &SPK_CURVE
}

/// Returns the License Key Pack curve.
pub fn lkp_curve() -> &'static CurveParams {
    &LKP_CURVE
}

/// Returns the curve for the given key kind.
pub fn curve_for(kind: KeyKind) -> &'static CurveParams {
    match kind {
        KeyKind::Spk => spk_curve(),
        KeyKind::Lkp => lkp_curve(),
    }
}
