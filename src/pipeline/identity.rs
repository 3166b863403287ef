//! uid/gid → name through the reentrant passwd/group lookups (Unix).

use std::ffi::CStr;
use std::io;
use std::mem::MaybeUninit;

use crate::utils::config::LookupBufConsts;

/// Starting buffer length for a `*_r` lookup, from sysconf when it has an opinion.
fn initial_buf_len(name: libc::c_int) -> usize {
    let hint = unsafe { libc::sysconf(name) };
    if hint > 0 {
        (hint as usize).min(LookupBufConsts::MAX)
    } else {
        LookupBufConsts::DEFAULT
    }
}

/// Double `buf`, or fail once it would pass the cap.
fn grow(buf: &mut Vec<libc::c_char>) -> io::Result<()> {
    let next = buf.len() * 2;
    if next > LookupBufConsts::MAX {
        return Err(io::Error::from_raw_os_error(libc::ERANGE));
    }
    buf.resize(next, 0);
    Ok(())
}

/// Resolve a user id to its login name via `getpwuid_r`.
pub fn lookup_user_name(uid: u32) -> io::Result<String> {
    let mut buf = vec![0 as libc::c_char; initial_buf_len(libc::_SC_GETPW_R_SIZE_MAX)];
    let mut pwd = MaybeUninit::<libc::passwd>::uninit();
    loop {
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        let rc = unsafe {
            libc::getpwuid_r(
                uid as libc::uid_t,
                pwd.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE {
            grow(&mut buf)?;
            continue;
        }
        if rc != 0 {
            return Err(io::Error::from_raw_os_error(rc));
        }
        if result.is_null() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no passwd entry for uid {uid}"),
            ));
        }
        // result points into pwd/buf, both alive here.
        let name = unsafe { CStr::from_ptr((*result).pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

/// Resolve a group id to its name via `getgrgid_r`.
pub fn lookup_group_name(gid: u32) -> io::Result<String> {
    let mut buf = vec![0 as libc::c_char; initial_buf_len(libc::_SC_GETGR_R_SIZE_MAX)];
    let mut grp = MaybeUninit::<libc::group>::uninit();
    loop {
        let mut result: *mut libc::group = std::ptr::null_mut();
        let rc = unsafe {
            libc::getgrgid_r(
                gid as libc::gid_t,
                grp.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE {
            grow(&mut buf)?;
            continue;
        }
        if rc != 0 {
            return Err(io::Error::from_raw_os_error(rc));
        }
        if result.is_null() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no group entry for gid {gid}"),
            ));
        }
        let name = unsafe { CStr::from_ptr((*result).gr_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}
